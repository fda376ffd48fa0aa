use std::cmp::Ordering;

use tracing::trace;

use crate::data::Record;

use super::collate::locale_compare;
use super::types::{SortDirection, SortDirective, SortKey};

/// Total order for costs. Loaded costs are always finite; NaN sorts last anyway.
pub(crate) fn compare_cost(a: f64, b: f64) -> Ordering {
    if a.is_nan() && b.is_nan() {
        Ordering::Equal
    } else if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

/// Ascending comparison of two records on one column
pub(crate) fn compare_by(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Model => locale_compare(&a.model, &b.model),
        SortKey::InputCost => compare_cost(a.input_cost, b.input_cost),
        SortKey::OutputCost => compare_cost(a.output_cost, b.output_cost),
        SortKey::Provider => locale_compare(&a.provider, &b.provider),
    }
}

/// Stable sort of `records` on `key`.
///
/// Descending flips the comparator rather than reversing the output, so rows
/// with equal keys keep their incoming relative order in both directions.
pub(crate) fn sort_records<'a>(
    records: &[&'a Record],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare_by(a, b, key)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare_by(b, a, key)),
    }
    trace!(rows = sorted.len(), %key, ?direction, "sorted records");
    sorted
}

/// Apply a directive; `Unsorted` returns the input order unchanged.
pub(crate) fn apply_directive<'a>(
    records: &[&'a Record],
    directive: SortDirective,
) -> Vec<&'a Record> {
    match directive {
        SortDirective::Unsorted => records.to_vec(),
        SortDirective::Sorted { key, direction } => sort_records(records, key, direction),
    }
}
