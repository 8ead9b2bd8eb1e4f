//! Content trimming.
//!
//! Vendor templates reserve wide transparent margins for design guides, so
//! scaling must use the visible footprint instead of the nominal canvas.

use image::{RgbaImage, imageops};

/// Inclusive bounding box of visible pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl ContentBounds {
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Padding to each edge of a `width x height` image: (top, bottom, left, right).
    pub fn padding(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        (
            self.min_y,
            height - self.max_y - 1,
            self.min_x,
            width - self.max_x - 1,
        )
    }

    /// Whether the content reaches any edge of a `width x height` image.
    pub fn touches_edge(&self, width: u32, height: u32) -> bool {
        self.min_x == 0 || self.min_y == 0 || self.max_x + 1 == width || self.max_y + 1 == height
    }
}

/// Bounding box of pixels whose alpha is strictly above `min_alpha`.
///
/// Returns `None` when no pixel qualifies.
pub fn content_bounds(image: &RgbaImage, min_alpha: u8) -> Option<ContentBounds> {
    let mut bounds: Option<ContentBounds> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] <= min_alpha {
            continue;
        }
        match bounds.as_mut() {
            Some(b) => {
                b.min_x = b.min_x.min(x);
                b.max_x = b.max_x.max(x);
                b.min_y = b.min_y.min(y);
                b.max_y = b.max_y.max(y);
            }
            None => {
                bounds = Some(ContentBounds {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                })
            }
        }
    }

    bounds
}

/// Crop to the pixels with non-zero alpha.
///
/// A fully transparent image is returned unchanged.
pub fn trim(image: RgbaImage) -> RgbaImage {
    let Some(bounds) = content_bounds(&image, 0) else {
        return image;
    };
    if bounds.width() == image.width() && bounds.height() == image.height() {
        return image;
    }
    imageops::crop_imm(
        &image,
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
    )
    .to_image()
}
