//! Per-icon render pipeline.
//!
//! ```text
//! source ─► extract ─► rasterize ─► trim ─► compose ─► tint ─► RgbaImage
//! ```
//!
//! Stages are strictly sequential and touch no shared state, so callers are
//! free to run many icons in parallel.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{IconError, IconResult};
use crate::image::svg::{CleanedDocument, extract, rasterize};
use crate::image::{compose_padded, content_bounds, tint, trim};

/// Variant preference used when none is configured.
pub const DEFAULT_VARIANTS: [&str; 3] = ["Regular-M", "Regular-S", "Regular-L"];

/// Resolved render settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Final square canvas edge.
    pub size: u32,
    /// Rasterization edge before trimming.
    pub working_size: u32,
    /// Transparent margin on each canvas edge.
    pub padding: u32,
    pub variants: Vec<String>,
    /// Flat template color; `None` keeps rendered colors.
    pub tint: Option<[u8; 3]>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 96,
            working_size: 1024,
            padding: 4,
            variants: DEFAULT_VARIANTS.iter().map(ToString::to_string).collect(),
            tint: Some([0, 0, 0]),
        }
    }
}

/// Read a vendor template from disk.
pub fn read_source(path: &Path) -> IconResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| IconError::io(path, &e))
}

/// Extract the preferred variant of `source` and render it.
pub fn render_source(source: &[u8], options: &RenderOptions) -> IconResult<RgbaImage> {
    let document = extract(source, &options.variants)?;
    render_document(&document, options)
}

/// Render an already extracted document to the final canvas.
pub fn render_document(document: &CleanedDocument, options: &RenderOptions) -> IconResult<RgbaImage> {
    let raw = rasterize(document, options.working_size).ok_or(IconError::RenderFailed)?;
    let trimmed = trim(raw);

    let mut image = compose_padded(&trimmed, options.size, options.size, options.padding);
    if let Some(rgb) = options.tint {
        tint(&mut image, rgb);
    }

    if is_blank(&image) {
        return Err(IconError::BlankImage);
    }
    Ok(image)
}

/// Whether no pixel of `image` is visible at all.
#[inline]
pub fn is_blank(image: &RgbaImage) -> bool {
    content_bounds(image, 0).is_none()
}

/// Encode `image` as PNG in memory.
pub fn encode_png(image: &RgbaImage) -> IconResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| IconError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{square_variant, vendor_document};

    fn small_options() -> RenderOptions {
        RenderOptions {
            working_size: 256,
            ..Default::default()
        }
    }

    #[test]
    fn test_square_variant_end_to_end() {
        let source = vendor_document(&[
            square_variant("Ultralight-S", 100.0, 100.0, 80.0),
            square_variant("Regular-M", 500.0, 100.0, 50.0),
        ]);
        let image = render_source(source.as_bytes(), &RenderOptions::default()).unwrap();
        assert_eq!(image.dimensions(), (96, 96));

        let bounds = content_bounds(&image, 0).unwrap();
        let (top, bottom, left, right) = bounds.padding(96, 96);
        for side in [top, bottom, left, right] {
            assert!((3..=5).contains(&side), "padding {:?}", (top, bottom, left, right));
        }
        assert!(top.abs_diff(bottom) <= 1);
        assert!(left.abs_diff(right) <= 1);

        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(95, 95)[3], 0);
        let center = image.get_pixel(48, 48).0;
        assert_eq!(&center[..3], &[0, 0, 0]);
        assert!(center[3] >= 250);
    }

    #[test]
    fn test_output_size_follows_options() {
        let source = vendor_document(&[square_variant("Regular-S", 10.0, 10.0, 30.0)]);
        let options = RenderOptions {
            size: 40,
            padding: 0,
            ..small_options()
        };
        let image = render_source(source.as_bytes(), &options).unwrap();
        assert_eq!(image.dimensions(), (40, 40));
    }

    #[test]
    fn test_missing_symbols_group_is_variant_error() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><g id="Guides"/></svg>"#;
        let err = render_source(source.as_bytes(), &small_options()).unwrap_err();
        assert!(matches!(err, IconError::VariantNotFound(_)));
    }

    #[test]
    fn test_invisible_variant_is_blank() {
        let source = vendor_document(&[r#"<g id="Regular-M"><path d="M 10 10 h 20 v 20 h -20 Z" fill="none"/></g>"#.to_string()]);
        let err = render_source(source.as_bytes(), &small_options()).unwrap_err();
        assert_eq!(err, IconError::BlankImage);
    }

    #[test]
    fn test_unrenderable_document() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"><g id="Symbols"><g id="Regular-M"/></g></svg>"#;
        let err = render_source(source.as_bytes(), &small_options()).unwrap_err();
        assert_eq!(err, IconError::RenderFailed);
    }

    #[test]
    fn test_tint_none_keeps_colors() {
        let source = vendor_document(&[r##"<g id="Regular-M"><path d="M 10 10 h 20 v 20 h -20 Z" fill="#ff0000"/></g>"##.to_string()]);
        let options = RenderOptions {
            tint: None,
            ..small_options()
        };
        let image = render_source(source.as_bytes(), &options).unwrap();
        let [r, g, b, a] = image.get_pixel(48, 48).0;
        assert!(r >= 250 && g <= 5 && b <= 5 && a >= 250);

        let tinted = render_source(source.as_bytes(), &small_options()).unwrap();
        assert_eq!(&tinted.get_pixel(48, 48).0[..3], &[0, 0, 0]);
    }

    #[test]
    fn test_encode_png_signature() {
        let image = RgbaImage::new(96, 96);
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (96, 96));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/icon.svg")).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }
}
