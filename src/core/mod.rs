//! View derivation: sort and filter operators over the pricing dataset.

mod collate;
mod filter;
pub(crate) mod provider;
mod sort;
mod types;
mod view;

pub(crate) use types::{SortDirection, SortDirective, SortIndicator, SortKey, ViewEvent};
pub(crate) use view::PricingView;
