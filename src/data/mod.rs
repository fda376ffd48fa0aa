//! Dataset store: the pricing records as loaded once at startup.

mod loader;
mod types;

pub(crate) use loader::load_dataset;
#[cfg(test)]
pub(crate) use types::record;
pub(crate) use types::{Dataset, Record};
