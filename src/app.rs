use std::io::{self, IsTerminal, Write};

use tracing::info;

use crate::cli::Cli;
use crate::core::{PricingView, ViewEvent};
use crate::core::provider::summarize_providers;
use crate::data::{Dataset, load_dataset};
use crate::error::{AppError, DataOrigin};
use crate::output::{
    NumberFormat, TableOptions, output_providers_json, output_view_csv, output_view_json,
    write_pricing_table, write_providers_table,
};
use crate::session::run_session;

const SESSION_PROMPT: &str = "pricetab> ";

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) number_format: NumberFormat,
    pub(crate) icon_base: &'a str,
    pub(crate) caption: Option<&'a str>,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions<'_> {
        TableOptions {
            use_color: self.cli.use_color(),
            show_icons: self.cli.show_icons,
            number_format: self.number_format,
            icon_base: self.icon_base,
            caption: self.caption,
            width: self.cli.width,
        }
    }

    fn origin(&self) -> DataOrigin {
        self.cli
            .data
            .clone()
            .map_or(DataOrigin::Bundled, DataOrigin::File)
    }
}

/// Write the view in the selected output format.
fn render_view<W: Write>(
    out: &mut W,
    view: &PricingView<'_>,
    ctx: &CommandContext<'_>,
    load_error: Option<&str>,
) -> io::Result<()> {
    if ctx.cli.json {
        writeln!(out, "{}", output_view_json(view, ctx.icon_base, load_error))
    } else if ctx.cli.csv {
        write!(out, "{}", output_view_csv(view, ctx.icon_base))
    } else {
        write_pricing_table(out, view, ctx.table_options())
    }
}

/// One-shot render. A load failure still renders the empty view before the error is returned.
pub(crate) fn handle_show(
    events: Vec<ViewEvent>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let (dataset, load_error) = match load_dataset(ctx.cli.data.as_deref()) {
        Ok(dataset) => (dataset, None),
        Err(e) => (Dataset::empty(ctx.origin()), Some(e)),
    };

    let mut view = PricingView::new(&dataset);
    for event in events {
        view.apply(event);
    }

    let message = load_error.as_ref().map(ToString::to_string);
    render_view(&mut io::stdout().lock(), &view, ctx, message.as_deref())?;

    match load_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Interactive session, starting from the view the command-line flags describe.
pub(crate) fn handle_session(
    events: Vec<ViewEvent>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let dataset = load_dataset(ctx.cli.data.as_deref())?;
    info!(records = dataset.len(), "starting session");

    let stdin = io::stdin();
    let prompt = stdin.is_terminal().then_some(SESSION_PROMPT);
    let mut view = PricingView::new(&dataset);
    for event in events {
        view.apply(event);
    }

    run_session(
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &mut view,
        prompt,
        |out, view| render_view(out, view, ctx, None),
    )
}

pub(crate) fn handle_providers(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let dataset = load_dataset(ctx.cli.data.as_deref())?;
    let summaries = summarize_providers(dataset.records());

    let mut out = io::stdout().lock();
    if ctx.cli.json {
        writeln!(out, "{}", output_providers_json(&summaries, ctx.icon_base))?;
    } else if dataset.is_empty() {
        writeln!(out, "No pricing data found.")?;
    } else {
        write_providers_table(
            &mut out,
            &summaries,
            ctx.icon_base,
            ctx.cli.use_color(),
            ctx.number_format,
        )?;
    }
    Ok(())
}
