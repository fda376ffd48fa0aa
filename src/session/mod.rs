//! Line-oriented event loop: one command per line, view re-rendered after each event.

mod commands;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::core::PricingView;
use crate::error::AppError;

use commands::{HELP, SessionCommand, parse_line};

/// Run a session over `input`, rendering into `out` and reporting bad lines to `err`.
///
/// The view is rendered once before the first command. Ends on `quit` or end of input.
pub(crate) fn run_session<R, W, E, F>(
    mut input: R,
    out: &mut W,
    err: &mut E,
    view: &mut PricingView<'_>,
    prompt: Option<&str>,
    mut render: F,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
    F: FnMut(&mut W, &PricingView<'_>) -> io::Result<()>,
{
    render(out, &*view)?;
    writeln!(out, "Type `help` for commands.")?;

    let mut buf = Vec::new();
    loop {
        if let Some(prompt) = prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("session input closed");
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(_) => {
                warn!(bytes = buf.len(), "rejected non-UTF-8 session input");
                writeln!(err, "Error: {}", AppError::NonUtf8Line)?;
                continue;
            }
        };

        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line, "rejected session input");
                writeln!(err, "Error: {e}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        if let Some(event) = command.event() {
            view.apply(event);
        }
        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            _ => {}
        }
        if command.renders() {
            render(out, &*view)?;
        }
    }

    Ok(())
}
