//! Provider display helpers: pure string transforms, no I/O.

use crate::data::Record;

/// Icon directory used when none is configured
pub(crate) const DEFAULT_ICON_BASE: &str = "/images";

/// Vendor part of a provider id: `"openai_chat"` becomes `"openai"`.
pub(crate) fn display_name(provider: &str) -> &str {
    provider
        .split_once('_')
        .map_or(provider, |(vendor, _)| vendor)
}

/// Icon resource for a provider, `"<base>/<display name>.svg"`.
pub(crate) fn icon_path(base: &str, provider: &str) -> String {
    format!(
        "{}/{}.svg",
        base.trim_end_matches('/'),
        display_name(provider)
    )
}

/// A distinct provider id and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProviderSummary<'a> {
    pub(crate) provider: &'a str,
    pub(crate) count: usize,
}

/// Distinct providers in first-seen order.
pub(crate) fn summarize_providers(records: &[Record]) -> Vec<ProviderSummary<'_>> {
    let mut summaries: Vec<ProviderSummary<'_>> = Vec::new();
    for record in records {
        match summaries
            .iter_mut()
            .find(|s| s.provider == record.provider)
        {
            Some(summary) => summary.count += 1,
            None => summaries.push(ProviderSummary {
                provider: &record.provider,
                count: 1,
            }),
        }
    }
    summaries
}
