//! Dataset loading
//!
//! Reads the pricing JSON once, validates every record, and either returns the
//! whole dataset or fails. Bad rows are never dropped silently.

use std::path::Path;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{DataOrigin, LoadError};

use super::types::{Dataset, Record};

/// Dataset compiled into the binary, used when no data file is configured.
const BUNDLED_DATA: &str = include_str!("../../data/pricing.json");

/// Load from `path`, or from the bundled dataset when no path is given.
pub(crate) fn load_dataset(path: Option<&Path>) -> Result<Dataset, LoadError> {
    let start = Instant::now();

    let dataset = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_dataset(&content, DataOrigin::File(path.to_path_buf()))?
        }
        None => parse_dataset(BUNDLED_DATA, DataOrigin::Bundled)?,
    };

    info!(
        "Loaded {} pricing records from {} ({:.2}ms)",
        dataset.len(),
        dataset.origin(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(dataset)
}

/// Parse a JSON array of records. The first invalid record fails the whole load.
pub(crate) fn parse_dataset(content: &str, origin: DataOrigin) -> Result<Dataset, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        origin: origin.clone(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray { origin });
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: Record = serde_json::from_value(item).map_err(|source| LoadError::Record {
            origin: origin.clone(),
            index,
            source,
        })?;
        validate_costs(&record, index, &origin)?;
        records.push(record);
    }

    debug!("Parsed {} records from {}", records.len(), origin);
    Ok(Dataset::new(records, origin))
}

fn validate_costs(record: &Record, index: usize, origin: &DataOrigin) -> Result<(), LoadError> {
    for (field, value) in [
        ("inputCost", record.input_cost),
        ("outputCost", record.output_cost),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(LoadError::InvalidCost {
                origin: origin.clone(),
                index,
                field,
                value,
            });
        }
    }
    Ok(())
}
