//! Rasterization of cleaned documents.
//!
//! Renders with `resvg` onto a square working bitmap. The drawn region is
//! the glyph's own bounds (see [`super::bounds`]), fitted uniformly and
//! centered, so small glyphs on large artboards keep their detail.

use image::RgbaImage;
use resvg::tiny_skia::Pixmap;
use usvg::{Options, Rect, Transform, Tree};

use super::bounds::focus_region;
use super::extract::CleanedDocument;
use crate::debug;

/// Render `document` to a `dimension x dimension` straight-alpha bitmap.
///
/// Returns `None` when the document cannot be parsed as SVG or the bitmap
/// cannot be allocated.
pub fn rasterize(document: &CleanedDocument, dimension: u32) -> Option<RgbaImage> {
    if dimension == 0 {
        return None;
    }

    let tree = match Tree::from_data(document.as_bytes(), &Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            debug!("render"; "usvg rejected document: {}", e);
            return None;
        }
    };

    let region = focus_region(&tree)?;
    let mut pixmap = Pixmap::new(dimension, dimension)?;
    resvg::render(&tree, fit_transform(region, dimension), &mut pixmap.as_mut());

    pixmap_to_image(&pixmap)
}

/// Transform mapping `region` into a `dimension` square, uniformly scaled
/// and centered.
#[allow(clippy::cast_precision_loss)]
fn fit_transform(region: Rect, dimension: u32) -> Transform {
    let target = dimension as f32;
    let scale = target / region.width().max(region.height());
    let tx = (target - region.width() * scale) / 2.0 - region.x() * scale;
    let ty = (target - region.height() * scale) / 2.0 - region.y() * scale;
    Transform::from_row(scale, 0.0, 0.0, scale, tx, ty)
}

/// Copy premultiplied pixmap data into a straight-alpha image.
fn pixmap_to_image(pixmap: &Pixmap) -> Option<RgbaImage> {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
}
