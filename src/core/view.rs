//! View state: the dataset plus the user's sort directive and filter term.
//!
//! The only cached state is the current sort permutation, because tie order
//! depends on the whole click history and not just the latest directive. The
//! filtered rows are recomputed from it on every read and never stored.

use tracing::debug;

use crate::data::{Dataset, Record};

use super::filter::{FilterTerm, filter_records};
use super::sort::apply_directive;
use super::types::{SortDirective, SortIndicator, SortKey, ViewEvent};

#[derive(Debug)]
pub(crate) struct PricingView<'a> {
    dataset: &'a Dataset,
    directive: SortDirective,
    term: FilterTerm,
    /// Dataset rows in the current sort order
    sorted: Vec<&'a Record>,
}

impl<'a> PricingView<'a> {
    /// Initial view: load order, no filter.
    pub(crate) fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            directive: SortDirective::Unsorted,
            term: FilterTerm::default(),
            sorted: dataset.records().iter().collect(),
        }
    }

    pub(crate) fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SortClick(key) => self.sort_click(key),
            ViewEvent::FilterChange(text) => self.filter_change(text),
        }
    }

    /// Header click: toggle the directive and re-sort the current order.
    pub(crate) fn sort_click(&mut self, key: SortKey) {
        self.directive = self.directive.after_click(key);
        self.sorted = apply_directive(&self.sorted, self.directive);
        debug!(
            key = ?self.directive.key(),
            direction = ?self.directive.direction(),
            "sort changed"
        );
    }

    pub(crate) fn filter_change(&mut self, text: impl Into<String>) {
        self.term = FilterTerm::new(text);
        debug!(term = self.term.as_str(), "filter changed");
    }

    /// Rows to display: current sort order narrowed by the filter.
    pub(crate) fn rows(&self) -> Vec<&'a Record> {
        filter_records(&self.sorted, &self.term)
    }

    pub(crate) fn directive(&self) -> SortDirective {
        self.directive
    }

    pub(crate) fn term(&self) -> &FilterTerm {
        &self.term
    }

    pub(crate) fn indicator(&self, column: SortKey) -> SortIndicator {
        self.directive.indicator(column)
    }

    pub(crate) fn total(&self) -> usize {
        self.dataset.len()
    }
}
