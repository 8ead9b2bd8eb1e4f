//! SVG bounding box calculation.
//!
//! Vendor templates declare a large artboard with the glyph in one small
//! region. Bounds are taken from the rendered nodes, stroke included, so
//! rasterization can spend its pixels on the glyph instead of the margins.

use usvg::{Rect, Tree};

/// Fraction of the longer side added around the content on every edge.
pub const FOCUS_MARGIN: f32 = 0.02;

/// Stroke-inclusive bounding box of everything under the root, in canvas
/// coordinates.
///
/// Returns `None` if the tree has nothing to draw.
pub fn calculate_stroke_bounds(tree: &Tree) -> Option<Rect> {
    tree.root()
        .children()
        .iter()
        .map(|node| node.abs_stroke_bounding_box())
        .fold(None, merge_bounds)
}

/// Region to rasterize: content bounds plus a small margin, or the whole
/// canvas when the content has no area.
pub fn focus_region(tree: &Tree) -> Option<Rect> {
    let canvas = || Rect::from_xywh(0.0, 0.0, tree.size().width(), tree.size().height());

    let Some(bounds) = calculate_stroke_bounds(tree) else {
        return canvas();
    };
    let side = bounds.width().max(bounds.height());
    if side <= 0.0 || !side.is_finite() {
        return canvas();
    }

    let margin = side * FOCUS_MARGIN;
    Rect::from_xywh(
        bounds.x() - margin,
        bounds.y() - margin,
        bounds.width() + margin * 2.0,
        bounds.height() + margin * 2.0,
    )
    .or_else(canvas)
}

/// Merge two optional bounding boxes into one
fn merge_bounds(a: Option<Rect>, b: Rect) -> Option<Rect> {
    match a {
        Some(existing) => {
            let min_x = existing.x().min(b.x());
            let min_y = existing.y().min(b.y());
            let max_x = existing.right().max(b.right());
            let max_y = existing.bottom().max(b.bottom());

            Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
        }
        None => Some(b),
    }
}
