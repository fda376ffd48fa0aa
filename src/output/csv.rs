use std::fmt::Write;

use crate::core::PricingView;
use crate::core::provider::{display_name, icon_path};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// One line per displayed row, in view order.
pub(crate) fn output_view_csv(view: &PricingView<'_>, icon_base: &str) -> String {
    let mut out = String::from("model,input_cost,output_cost,provider,provider_name,icon_path\n");

    for record in view.rows() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            csv_escape(&record.model),
            record.input_cost,
            record.output_cost,
            csv_escape(&record.provider),
            csv_escape(display_name(&record.provider)),
            csv_escape(&icon_path(icon_base, &record.provider)),
        );
    }

    out
}
