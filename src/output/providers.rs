use std::io::{self, Write};

use serde::Serialize;
use tracing::error;

use crate::core::provider::{ProviderSummary, display_name, icon_path};
use crate::output::format::{
    NumberFormat, create_styled_table, format_count, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonProvider<'a> {
    provider: &'a str,
    provider_name: &'a str,
    icon_path: String,
    count: usize,
}

pub(crate) fn output_providers_json(summaries: &[ProviderSummary<'_>], icon_base: &str) -> String {
    let providers: Vec<JsonProvider<'_>> = summaries
        .iter()
        .map(|s| JsonProvider {
            provider: s.provider,
            provider_name: display_name(s.provider),
            icon_path: icon_path(icon_base, s.provider),
            count: s.count,
        })
        .collect();

    serde_json::to_string_pretty(&providers).unwrap_or_else(|e| {
        error!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

pub(crate) fn write_providers_table<W: Write>(
    out: &mut W,
    summaries: &[ProviderSummary<'_>],
    icon_base: &str,
    use_color: bool,
    number_format: NumberFormat,
) -> io::Result<()> {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Provider", use_color),
        header_cell("Name", use_color),
        header_cell("Icon", use_color),
        header_cell("Models", use_color),
    ]);

    let name_color = if use_color {
        Some(comfy_table::Color::Cyan)
    } else {
        None
    };
    for s in summaries {
        table.add_row(vec![
            styled_cell(s.provider, None, false),
            styled_cell(display_name(s.provider), name_color, false),
            styled_cell(&icon_path(icon_base, s.provider), None, false),
            right_cell(&format_count(s.count, number_format), None, false),
        ]);
    }

    writeln!(out, "\n  Providers\n")?;
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "\n  {} providers\n",
        format_count(summaries.len(), number_format)
    )
}
