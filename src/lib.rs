//! symbake - bake SF Symbol template SVGs into fixed-size template PNGs.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── image/       # extract, rasterize, trim, compose, tint
//! ├── pipeline     # per-icon stage chain + PNG encoding
//! ├── cache/       # write-once document and image caches
//! ├── prewarm      # one-shot prewarm coordinator
//! ├── store        # IconStore: catalog + caches + prewarm
//! ├── config/      # icons.toml manifest
//! ├── core/        # IconId, IconAsset, Catalog
//! ├── cli/         # render / check commands
//! └── logger       # log!/debug! and progress line
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod image;
pub mod logger;
pub mod pipeline;
pub mod prewarm;
pub mod store;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

pub use error::{IconError, IconResult};
pub use store::{IconImage, IconStore, StoreStats};
