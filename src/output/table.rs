use std::io::{self, Write};

use comfy_table::{Cell, Color};

use crate::core::provider::{display_name, icon_path};
use crate::core::{PricingView, SortKey};
use crate::output::format::{
    NumberFormat, create_styled_table, format_count, format_price, header_cell, right_cell,
    styled_cell,
};

/// Background for every other row, matching the web table's striping
const STRIPE_BG: Color = Color::Rgb {
    r: 45,
    g: 45,
    b: 45,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions<'a> {
    pub(crate) use_color: bool,
    pub(crate) show_icons: bool,
    pub(crate) number_format: NumberFormat,
    pub(crate) icon_base: &'a str,
    pub(crate) caption: Option<&'a str>,
    /// Fixed width; terminal width when unset
    pub(crate) width: Option<u16>,
}

/// Render the current view as a table, headers carrying the sort indicators.
pub(crate) fn render_pricing_table(view: &PricingView<'_>, options: TableOptions<'_>) -> String {
    let use_color = options.use_color;
    let number_format = options.number_format;

    let mut table = create_styled_table();
    if let Some(width) = options.width {
        table.set_width(width);
    }

    let mut header: Vec<Cell> = SortKey::ALL
        .iter()
        .map(|&key| {
            let text = format!("{} {}", key.label(), view.indicator(key).glyph());
            header_cell(&text, use_color)
        })
        .collect();
    if options.show_icons {
        header.push(header_cell("Icon", use_color));
    }
    table.set_header(header);

    let cost_color = if use_color { Some(Color::Green) } else { None };

    for (index, record) in view.rows().iter().enumerate() {
        let mut row = vec![
            Cell::new(&record.model),
            right_cell(
                &format_price(record.input_cost, number_format),
                cost_color,
                false,
            ),
            right_cell(
                &format_price(record.output_cost, number_format),
                cost_color,
                false,
            ),
            styled_cell(display_name(&record.provider), None, false),
        ];
        if options.show_icons {
            row.push(Cell::new(icon_path(options.icon_base, &record.provider)));
        }
        if use_color && index % 2 == 0 {
            row = row.into_iter().map(|cell| cell.bg(STRIPE_BG)).collect();
        }
        table.add_row(row);
    }

    table.to_string()
}

/// "3 of 27 models matching "gpt""
pub(crate) fn summary_line(view: &PricingView<'_>, number_format: NumberFormat) -> String {
    let shown = view.rows().len();
    let mut line = format!(
        "{} of {} models",
        format_count(shown, number_format),
        format_count(view.total(), number_format)
    );
    if !view.term().is_empty() {
        line.push_str(&format!(" matching \"{}\"", view.term().as_str()));
    }
    line
}

/// Title, caption, table and summary, as printed by `show` and `session`.
pub(crate) fn write_pricing_table<W: Write>(
    out: &mut W,
    view: &PricingView<'_>,
    options: TableOptions<'_>,
) -> io::Result<()> {
    writeln!(out, "\n  LLM Pricing Table")?;
    if let Some(caption) = options.caption {
        writeln!(out, "  {caption}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", render_pricing_table(view, options))?;
    writeln!(out, "\n  {}\n", summary_line(view, options.number_format))
}
