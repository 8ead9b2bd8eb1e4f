//! Core types - pure abstractions shared across the codebase.

mod catalog;
mod icon;

pub use catalog::Catalog;
pub use icon::{DEFAULT_FALLBACK, IconAsset, IconId};
