//! SVG processing.
//!
//! # Modules
//!
//! - [`extract`]: single-variant extraction from vendor templates
//! - [`rasterize`]: resvg rendering onto a square working bitmap
//! - [`bounds`]: stroke-inclusive content bounds
//!
//! # Architecture
//!
//! ```text
//! vendor template (.svg)
//!         │
//!         ▼
//!    ┌─────────┐
//!    │ extract │ ──► CleanedDocument (one variant, no guides)
//!    └────┬────┘
//!         │
//!         ▼
//!   ┌───────────┐
//!   │ rasterize │ ──► RgbaImage (working size, fitted to bounds)
//!   └───────────┘
//! ```

mod bounds;
mod extract;
mod rasterize;

pub use extract::{CleanedDocument, SYMBOLS_GROUP, extract};
pub use rasterize::rasterize;
