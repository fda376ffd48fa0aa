use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let format = match base.as_str() {
            "de" => NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            },
            "fr" | "ru" => NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            },
            "en" | "zh" => NumberFormat::default(),
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };

        Ok(format)
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub(super) fn format_count(n: usize, format: NumberFormat) -> String {
    group_digits(&n.to_string(), format.group_sep)
}

/// Cost with two decimals, e.g. `1,234.50` (en) or `1.234,50` (de).
///
/// Exact halves round away from zero: `0.125` gives `0.13`.
pub(super) fn format_price(cost: f64, format: NumberFormat) -> String {
    if !cost.is_finite() {
        return "N/A".to_string();
    }
    let cents = (cost.abs() * 100.0).round() / 100.0;
    let fixed = format!("{cents:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if cost < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}{}{frac_part}",
        group_digits(int_part, format.group_sep),
        format.decimal_sep
    )
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::{NumberFormat, format_count, format_price};

    #[test]
    fn format_price_two_decimals() {
        let fmt = NumberFormat::default();
        assert_eq!(format_price(0.0, fmt), "0.00");
        assert_eq!(format_price(2.5, fmt), "2.50");
        assert_eq!(format_price(0.0375, fmt), "0.04");
        assert_eq!(format_price(1234.5, fmt), "1,234.50");
    }

    #[test]
    fn format_price_rounds_halves_up() {
        let fmt = NumberFormat::default();
        assert_eq!(format_price(0.125, fmt), "0.13");
        assert_eq!(format_price(0.625, fmt), "0.63");
        assert_eq!(format_price(1.125, fmt), "1.13");
        assert_eq!(format_price(0.124, fmt), "0.12");
        assert_eq!(format_price(9.999, fmt), "10.00");
    }

    #[test]
    fn format_price_handles_non_finite() {
        assert_eq!(format_price(f64::NAN, NumberFormat::default()), "N/A");
    }

    #[test]
    fn format_price_with_de_locale() {
        let fmt = NumberFormat::from_locale(Some("de")).unwrap();
        assert_eq!(format_price(1234.5, fmt), "1.234,50");
        assert_eq!(format_price(0.15, fmt), "0,15");
    }

    #[test]
    fn format_count_groups_thousands() {
        let fmt = NumberFormat::from_locale(Some("fr")).unwrap();
        assert_eq!(format_count(999, fmt), "999");
        assert_eq!(format_count(12_000, fmt), "12 000");
    }

    #[test]
    fn from_locale_none_or_empty_returns_default() {
        let fmt = NumberFormat::from_locale(None).unwrap();
        assert_eq!(format_price(1.0, fmt), "1.00");
        let fmt = NumberFormat::from_locale(Some("")).unwrap();
        assert_eq!(format_price(1.0, fmt), "1.00");
    }

    #[test]
    fn from_locale_with_region_suffix() {
        let fmt = NumberFormat::from_locale(Some("de-DE")).unwrap();
        assert_eq!(format_price(3.0, fmt), "3,00");
    }

    #[test]
    fn from_locale_unsupported_returns_error() {
        assert!(NumberFormat::from_locale(Some("ja")).is_err());
    }
}
