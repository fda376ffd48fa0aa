//! Session line parser.

use crate::core::{SortKey, ViewEvent};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    /// Header click on a column
    Sort(SortKey),
    /// Replace the filter term; empty clears it
    Filter(String),
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// The view event this command feeds into the core, if any.
    pub(crate) fn event(&self) -> Option<ViewEvent> {
        match self {
            SessionCommand::Sort(key) => Some(ViewEvent::SortClick(*key)),
            SessionCommand::Filter(text) => Some(ViewEvent::FilterChange(text.clone())),
            SessionCommand::Show | SessionCommand::Help | SessionCommand::Quit => None,
        }
    }

    /// Whether the view is rendered after this command runs.
    pub(crate) fn renders(&self) -> bool {
        matches!(
            self,
            SessionCommand::Sort(_) | SessionCommand::Filter(_) | SessionCommand::Show
        )
    }
}

pub(crate) const HELP: &str = "\
Commands:
  sort <column>   Click a column header (model, input, output, provider)
  filter <text>   Show models containing <text> (case-insensitive)
  clear           Remove the filter
  show            Render the current view
  help            Show this help
  quit            Leave the session";

/// Parse one input line. `Ok(None)` for blank lines.
pub(crate) fn parse_line(line: &str) -> Result<Option<SessionCommand>, AppError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest),
        None => (line, ""),
    };

    let command = match cmd.to_lowercase().as_str() {
        "sort" => {
            let column = rest.trim();
            if column.is_empty() {
                return Err(AppError::MissingArgument {
                    command: "sort",
                    expected: "a column name",
                });
            }
            SessionCommand::Sort(column.parse()?)
        }
        // Rest of the line; inner spaces are part of the term
        "filter" => SessionCommand::Filter(rest.trim().to_string()),
        "clear" => SessionCommand::Filter(String::new()),
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => {
            return Err(AppError::UnknownCommand {
                input: cmd.to_string(),
            });
        }
    };

    Ok(Some(command))
}
