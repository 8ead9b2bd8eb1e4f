//! Image processing utilities.
//!
//! # Modules
//!
//! - [`svg`]: variant extraction and rasterization of vendor templates
//! - [`trim`]: crop to visible content
//! - [`compose`]: fit and center on a fixed canvas
//! - [`recolor`]: flat template tint

pub mod compose;
pub mod recolor;
pub mod svg;
pub mod trim;

pub use compose::{compose, compose_padded};
pub use recolor::tint;
pub use trim::{ContentBounds, content_bounds, trim};
