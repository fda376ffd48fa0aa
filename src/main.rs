mod app;
mod cli;
mod config;
mod core;
mod data;
mod error;
mod logging;
mod output;
mod session;
mod utils;

use clap::Parser;
use tracing::debug;

use app::{CommandContext, handle_providers, handle_session, handle_show};
use cli::{Cli, Commands};
use config::Config;
use crate::core::provider::DEFAULT_ICON_BASE;
use error::AppError;
use output::NumberFormat;
use utils::{format_caption_date, parse_date};

/// "Last scraped Jun 1, 2024; For US-East unless otherwise stated"
fn build_caption(cli: &Cli) -> Result<Option<String>, AppError> {
    let date = cli
        .scraped_on
        .as_deref()
        .map(parse_date)
        .transpose()?
        .map(format_caption_date);

    Ok(match (date, cli.region_note.as_deref()) {
        (Some(date), Some(note)) => Some(format!("Last scraped {date}; {note}")),
        (Some(date), None) => Some(format!("Last scraped {date}")),
        (None, Some(note)) => Some(note.to_string()),
        (None, None) => None,
    })
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let events = cli.view_events()?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    let caption = build_caption(cli)?;

    let ctx = CommandContext {
        cli,
        number_format,
        icon_base: cli.icon_base.as_deref().unwrap_or(DEFAULT_ICON_BASE),
        caption: caption.as_deref(),
    };

    match &cli.command {
        None | Some(Commands::Show(_)) => handle_show(events, &ctx),
        Some(Commands::Session) => handle_session(events, &ctx),
        Some(Commands::Providers) => handle_providers(&ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);
    debug!(?cli, "resolved options");

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
