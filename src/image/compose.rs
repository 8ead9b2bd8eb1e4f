//! Canvas compositing.
//!
//! Scales a trimmed bitmap uniformly to fit a fixed canvas and centers it on
//! a fully transparent background.

use image::{Rgba, RgbaImage, imageops, imageops::FilterType};

/// Size of `(width, height)` scaled uniformly to fit `(canvas_w, canvas_h)`.
///
/// Each axis is at least 1 and never exceeds the canvas.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_size(width: u32, height: u32, canvas_w: u32, canvas_h: u32) -> (u32, u32) {
    let scale = f64::min(
        f64::from(canvas_w) / f64::from(width),
        f64::from(canvas_h) / f64::from(height),
    );
    let scaled_w = (f64::from(width) * scale).round() as u32;
    let scaled_h = (f64::from(height) * scale).round() as u32;
    (scaled_w.clamp(1, canvas_w), scaled_h.clamp(1, canvas_h))
}

/// Fit `image` into a transparent `width x height` canvas, centered.
///
/// The aspect ratio is always preserved. When the image already has the
/// fitted size it is copied without resampling.
pub fn compose(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    compose_padded(image, width, height, 0)
}

/// Like [`compose`], but keeps `padding` transparent pixels on every edge.
pub fn compose_padded(image: &RgbaImage, width: u32, height: u32, padding: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    let inner_w = width.saturating_sub(padding.saturating_mul(2));
    let inner_h = height.saturating_sub(padding.saturating_mul(2));
    if image.width() == 0 || image.height() == 0 || inner_w == 0 || inner_h == 0 {
        return canvas;
    }

    let (scaled_w, scaled_h) = fit_size(image.width(), image.height(), inner_w, inner_h);
    let x = i64::from((width - scaled_w) / 2);
    let y = i64::from((height - scaled_h) / 2);

    if (scaled_w, scaled_h) == image.dimensions() {
        imageops::replace(&mut canvas, image, x, y);
    } else {
        // Resample premultiplied so transparent pixels carry no color.
        let mut scaled = imageops::resize(
            &premultiply(image),
            scaled_w,
            scaled_h,
            FilterType::Lanczos3,
        );
        demultiply(&mut scaled);
        imageops::replace(&mut canvas, &scaled, x, y);
    }

    canvas
}

fn premultiply(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let alpha = u16::from(pixel[3]);
        for channel in &mut pixel.0[..3] {
            *channel = scale_channel(u16::from(*channel) * alpha + 127, 255);
        }
    }
    out
}

fn demultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = u16::from(pixel[3]);
        if alpha == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
            continue;
        }
        for channel in &mut pixel.0[..3] {
            *channel = scale_channel(u16::from(*channel) * 255 + alpha / 2, alpha);
        }
    }
}

#[inline]
fn scale_channel(numerator: u16, denominator: u16) -> u8 {
    u8::try_from(numerator / denominator).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::trim::content_bounds;
    use image::Rgba;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_fit_size() {
        assert_eq!(fit_size(200, 100, 96, 96), (96, 48));
        assert_eq!(fit_size(100, 200, 96, 96), (48, 96));
        assert_eq!(fit_size(50, 50, 96, 96), (96, 96));
        assert_eq!(fit_size(1000, 1, 96, 96), (96, 1));
    }

    #[test]
    fn test_wide_input_is_centered_vertically() {
        let image = RgbaImage::from_pixel(200, 100, BLACK);
        let out = compose(&image, 96, 96);

        assert_eq!(out.dimensions(), (96, 96));
        let bounds = content_bounds(&out, 0).unwrap();
        assert_eq!(bounds.width(), 96);
        assert_eq!(bounds.height(), 48);
        assert_eq!(bounds.min_y, 24);
        assert_eq!(out.get_pixel(48, 0)[3], 0);
        assert_eq!(out.get_pixel(48, 95)[3], 0);
    }

    #[test]
    fn test_tall_input_is_centered_horizontally() {
        let image = RgbaImage::from_pixel(30, 120, BLACK);
        let out = compose(&image, 96, 96);

        assert_eq!(out.dimensions(), (96, 96));
        let bounds = content_bounds(&out, 0).unwrap();
        assert_eq!(bounds.height(), 96);
        assert_eq!(bounds.width(), 24);
        assert_eq!(bounds.min_x, 36);
        assert_eq!(out.get_pixel(0, 48)[3], 0);
    }

    #[test]
    fn test_already_sized_is_pixel_identical() {
        let mut image = RgbaImage::new(96, 96);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8, y as u8, (x ^ y) as u8, ((x + y) % 256) as u8]);
        }
        assert_eq!(compose(&image, 96, 96), image);
    }

    #[test]
    fn test_non_square_canvas() {
        let image = RgbaImage::from_pixel(10, 10, BLACK);
        let out = compose(&image, 64, 32);
        assert_eq!(out.dimensions(), (64, 32));
        let bounds = content_bounds(&out, 0).unwrap();
        assert_eq!((bounds.min_x, bounds.width()), (16, 32));
    }

    #[test]
    fn test_downscale_keeps_edge_colors() {
        // White glyph on transparent black: edges must not darken.
        let mut image = RgbaImage::new(200, 200);
        for y in 51..151 {
            for x in 51..151 {
                image.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let out = compose(&image, 96, 96);

        let mut partial = 0;
        for pixel in out.pixels().filter(|p| p[3] > 0) {
            assert_eq!(&pixel.0[..3], &[255, 255, 255], "{pixel:?}");
            if pixel[3] < 255 {
                partial += 1;
            }
        }
        assert!(partial > 0);
        assert!(out.pixels().filter(|p| p[3] == 0).all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_padding_keeps_margins_clear() {
        let image = RgbaImage::from_pixel(50, 50, BLACK);
        let out = compose_padded(&image, 96, 96, 4);
        let bounds = content_bounds(&out, 0).unwrap();
        assert_eq!(bounds.padding(96, 96), (4, 4, 4, 4));

        let wide = RgbaImage::from_pixel(200, 100, BLACK);
        let bounds = content_bounds(&compose_padded(&wide, 96, 96, 4), 0).unwrap();
        assert_eq!((bounds.min_x, bounds.width(), bounds.height()), (4, 88, 44));
        assert!(!bounds.touches_edge(96, 96));
    }

    #[test]
    fn test_padding_larger_than_canvas() {
        let image = RgbaImage::from_pixel(5, 5, BLACK);
        let out = compose_padded(&image, 8, 8, 4);
        assert!(content_bounds(&out, 0).is_none());
    }

    #[test]
    fn test_empty_input_gives_transparent_canvas() {
        let out = compose(&RgbaImage::new(0, 0), 96, 96);
        assert_eq!(out.dimensions(), (96, 96));
        assert!(content_bounds(&out, 0).is_none());
    }
}
