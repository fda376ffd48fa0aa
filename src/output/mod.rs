mod csv;
mod format;
mod json;
mod providers;
mod table;

pub(crate) use csv::output_view_csv;
pub(crate) use format::NumberFormat;
pub(crate) use json::output_view_json;
pub(crate) use providers::{output_providers_json, write_providers_table};
pub(crate) use table::{TableOptions, write_pricing_table};
