use serde::{Deserialize, Serialize};

use crate::error::DataOrigin;

/// One pricing entry. Costs are USD per million tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Record {
    pub(crate) model: String,
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    /// Provider identifier, optionally `<vendor>_<variant>`
    pub(crate) provider: String,
}

/// The canonical pricing records, in load order.
///
/// Built once by the loader and never mutated afterwards; views borrow from it.
#[derive(Debug)]
pub(crate) struct Dataset {
    records: Vec<Record>,
    origin: DataOrigin,
}

impl Dataset {
    pub(crate) fn new(records: Vec<Record>, origin: DataOrigin) -> Self {
        Self { records, origin }
    }

    /// Placeholder shown when loading failed: no rows, but the table still renders.
    pub(crate) fn empty(origin: DataOrigin) -> Self {
        Self::new(Vec::new(), origin)
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn origin(&self) -> &DataOrigin {
        &self.origin
    }
}

#[cfg(test)]
pub(crate) fn record(model: &str, input_cost: f64, output_cost: f64, provider: &str) -> Record {
    Record {
        model: model.to_string(),
        input_cost,
        output_cost,
        provider: provider.to_string(),
    }
}
