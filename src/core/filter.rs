use crate::data::Record;

/// Case-insensitive substring filter on the model name.
///
/// Keeps the text as typed for display and a lowercased copy for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterTerm {
    raw: String,
    folded: String,
}

impl FilterTerm {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub(crate) fn matches(&self, record: &Record) -> bool {
        self.folded.is_empty() || record.model.to_lowercase().contains(&self.folded)
    }
}

/// Keep matching records, preserving input order.
pub(crate) fn filter_records<'a>(records: &[&'a Record], term: &FilterTerm) -> Vec<&'a Record> {
    records
        .iter()
        .copied()
        .filter(|record| term.matches(record))
        .collect()
}
