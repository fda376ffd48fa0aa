//! View state types: sort keys, directions, directives and user events.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// A sortable column. The set is closed, so an unknown key can only appear at a
/// text boundary (CLI flag, session line) and is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum SortKey {
    Model,
    InputCost,
    OutputCost,
    Provider,
}

impl SortKey {
    /// Columns in display order
    pub(crate) const ALL: [SortKey; 4] = [
        SortKey::Model,
        SortKey::InputCost,
        SortKey::OutputCost,
        SortKey::Provider,
    ];

    /// Field name as it appears in the dataset JSON
    pub(crate) fn field_name(self) -> &'static str {
        match self {
            SortKey::Model => "model",
            SortKey::InputCost => "inputCost",
            SortKey::OutputCost => "outputCost",
            SortKey::Provider => "provider",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortKey::Model => "Model Name",
            SortKey::InputCost => "Input Cost ($ USD / M tokens)",
            SortKey::OutputCost => "Output Cost ($ USD / M tokens)",
            SortKey::Provider => "Provider",
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    /// Accepts `inputCost`, `input-cost`, `input_cost`, `input` and so on, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "model" | "name" => Ok(SortKey::Model),
            "inputcost" | "input" => Ok(SortKey::InputCost),
            "outputcost" | "output" => Ok(SortKey::OutputCost),
            "provider" => Ok(SortKey::Provider),
            _ => Err(AppError::InvalidSortKey {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// The active sort column and direction.
///
/// `Unsorted` is the initial state only: once a column has been clicked the
/// directive always names a key and a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortDirective {
    #[default]
    Unsorted,
    Sorted {
        key: SortKey,
        direction: SortDirection,
    },
}

impl SortDirective {
    pub(crate) fn key(self) -> Option<SortKey> {
        match self {
            SortDirective::Unsorted => None,
            SortDirective::Sorted { key, .. } => Some(key),
        }
    }

    pub(crate) fn direction(self) -> Option<SortDirection> {
        match self {
            SortDirective::Unsorted => None,
            SortDirective::Sorted { direction, .. } => Some(direction),
        }
    }

    /// Directive after a header click on `key`: the active ascending column flips
    /// to descending, anything else starts ascending on `key`.
    pub(crate) fn after_click(self, key: SortKey) -> Self {
        let direction = match self {
            SortDirective::Sorted {
                key: active,
                direction: SortDirection::Ascending,
            } if active == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        SortDirective::Sorted { key, direction }
    }

    /// Header affordance for `column`
    pub(crate) fn indicator(self, column: SortKey) -> SortIndicator {
        match self {
            SortDirective::Sorted { key, direction } if key == column => match direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }
}

/// Per-column sort state for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "⇅",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

/// The only two mutations the view accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewEvent {
    SortClick(SortKey),
    FilterChange(String),
}
