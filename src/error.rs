use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error(
        "Invalid sort column \"{input}\" (expected one of: model, input-cost, output-cost, provider)"
    )]
    InvalidSortKey { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Unknown command \"{input}\" (type `help` for a list of commands)")]
    UnknownCommand { input: String },

    #[error("`{command}` does not take --sort or --filter")]
    ViewFlagsUnsupported { command: &'static str },

    #[error("Input line is not valid UTF-8")]
    NonUtf8Line,

    #[error("`{command}` requires {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a dataset came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DataOrigin {
    File(PathBuf),
    Bundled,
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataOrigin::File(path) => write!(f, "{}", path.display()),
            DataOrigin::Bundled => write!(f, "<bundled dataset>"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {origin}: {source}")]
    Parse {
        origin: DataOrigin,
        source: serde_json::Error,
    },

    #[error("Expected a JSON array of pricing records in {origin}")]
    NotAnArray { origin: DataOrigin },

    #[error("Invalid record #{index} in {origin}: {source}")]
    Record {
        origin: DataOrigin,
        index: usize,
        source: serde_json::Error,
    },

    #[error("Invalid record #{index} in {origin}: {field} must be a non-negative number, got {value}")]
    InvalidCost {
        origin: DataOrigin,
        index: usize,
        field: &'static str,
        value: f64,
    },
}
