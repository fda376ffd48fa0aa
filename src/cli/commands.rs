//! CLI subcommand definitions

use clap::{Args, Subcommand};

use crate::core::{SortKey, ViewEvent};

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render the pricing table once (default)
    Show(ShowArgs),
    /// Read sort/filter events from stdin, re-rendering after each
    Session,
    /// List providers with their display names and icon paths
    Providers,
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct ShowArgs {
    /// Click a column header (repeat to replay clicks, e.g. twice for descending)
    #[arg(short, long, value_name = "COLUMN")]
    pub(crate) sort: Vec<SortKey>,

    /// Only show models whose name contains TEXT (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub(crate) filter: Option<String>,
}

impl ShowArgs {
    pub(crate) fn is_empty(&self) -> bool {
        self.sort.is_empty() && self.filter.is_none()
    }

    /// The user events these flags stand for, in order.
    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        let mut events: Vec<ViewEvent> = self.sort.iter().copied().map(ViewEvent::SortClick).collect();
        if let Some(text) = &self.filter {
            events.push(ViewEvent::FilterChange(text.clone()));
        }
        events
    }
}
