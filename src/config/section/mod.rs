//! Manifest section definitions.
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[render]`  | Canvas size, working size, padding, variants, tint |
//! | `[paths]`   | Resources and output directories               |
//! | `[[icons]]` | Icon id → source document + fallback glyph     |

mod icons;
mod paths;
mod render;

pub use icons::{DEFAULT_FALLBACK, IconEntry, default_icons};
pub use paths::PathsConfig;
pub use render::{RenderConfig, parse_tint};
