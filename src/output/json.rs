use serde::Serialize;
use tracing::error;

use crate::core::provider::{display_name, icon_path};
use crate::core::{PricingView, SortDirection, SortDirective, SortIndicator, SortKey};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    model: &'a str,
    input_cost: f64,
    output_cost: f64,
    provider: &'a str,
    provider_name: &'a str,
    icon_path: String,
}

#[derive(Debug, Serialize)]
struct JsonColumn {
    key: SortKey,
    label: &'static str,
    indicator: SortIndicator,
}

#[derive(Debug, Serialize)]
struct JsonSort {
    key: SortKey,
    direction: SortDirection,
}

#[derive(Debug, Serialize)]
struct JsonView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    sort: Option<JsonSort>,
    filter: &'a str,
    columns: Vec<JsonColumn>,
    rows: Vec<JsonRow<'a>>,
    total: usize,
    shown: usize,
}

/// Serialize the view with per-column indicators and derived provider fields.
///
/// `load_error` is set when the dataset failed to load and the view is empty.
pub(crate) fn output_view_json(
    view: &PricingView<'_>,
    icon_base: &str,
    load_error: Option<&str>,
) -> String {
    let rows: Vec<JsonRow<'_>> = view
        .rows()
        .into_iter()
        .map(|record| JsonRow {
            model: &record.model,
            input_cost: record.input_cost,
            output_cost: record.output_cost,
            provider: &record.provider,
            provider_name: display_name(&record.provider),
            icon_path: icon_path(icon_base, &record.provider),
        })
        .collect();

    let sort = match view.directive() {
        SortDirective::Unsorted => None,
        SortDirective::Sorted { key, direction } => Some(JsonSort { key, direction }),
    };

    let output = JsonView {
        error: load_error,
        sort,
        filter: view.term().as_str(),
        columns: SortKey::ALL
            .iter()
            .map(|&key| JsonColumn {
                key,
                label: key.label(),
                indicator: view.indicator(key),
            })
            .collect(),
        shown: rows.len(),
        rows,
        total: view.total(),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        error!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
