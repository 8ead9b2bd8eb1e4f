//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! size = 96                   # Final canvas edge in pixels
//! working_size = 1024         # Rasterization edge before trim/downscale
//! padding = 4                 # Transparent margin kept on every side of the canvas
//! variants = ["Regular-M", "Regular-S", "Regular-L"]  # Variant preference order
//! tint = "#000000"            # Flat template color, or "none" to keep rendered colors
//! ```

use serde::{Deserialize, Serialize};

use crate::pipeline::RenderOptions;

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Final square canvas edge.
    pub size: u32,

    /// Square edge the document is rasterized at before trimming.
    pub working_size: u32,

    /// Transparent pixels reserved on each canvas edge.
    pub padding: u32,

    /// Variant ids tried in order inside the `Symbols` group.
    pub variants: Vec<String>,

    /// `#rrggbb` or `none`.
    pub tint: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            size: defaults.size,
            working_size: defaults.working_size,
            padding: defaults.padding,
            variants: defaults.variants,
            tint: "#000000".to_string(),
        }
    }
}

impl RenderConfig {
    /// Collect validation problems into `errors`.
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.size == 0 {
            errors.push("render.size must be greater than 0".into());
        }
        if self.working_size < self.size {
            errors.push(format!(
                "render.working_size ({}) must be at least render.size ({})",
                self.working_size, self.size
            ));
        }
        if self.size > 0 && self.padding.saturating_mul(2) >= self.size {
            errors.push(format!(
                "render.padding ({}) leaves no room inside render.size ({})",
                self.padding, self.size
            ));
        }
        if self.variants.is_empty() {
            errors.push("render.variants must name at least one variant".into());
        }
        if parse_tint(&self.tint).is_none() {
            errors.push(format!(
                "render.tint `{}` is neither `none` nor a #rrggbb color",
                self.tint
            ));
        }
    }

    /// Resolve into pipeline options. Call after [`Self::validate`].
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            size: self.size,
            working_size: self.working_size,
            padding: self.padding,
            variants: self.variants.clone(),
            tint: parse_tint(&self.tint).flatten(),
        }
    }
}

/// Parse a tint setting.
///
/// Returns `Some(None)` for `none`, `Some(Some(rgb))` for a hex color and
/// `None` when the value is invalid.
pub fn parse_tint(value: &str) -> Option<Option<[u8; 3]>> {
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    crate::image::recolor::parse_hex_color(value).map(Some)
}
