//! Template recolor.
//!
//! Template images carry their information in alpha only. Flattening every
//! pixel to one color keeps stray fills from the vendor stylesheet out of
//! the output.

use image::RgbaImage;

/// Parse `#rrggbb` (leading `#` optional) to RGB bytes.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Replace every pixel's color with `rgb`, keeping alpha.
pub fn tint(image: &mut RgbaImage, rgb: [u8; 3]) {
    for pixel in image.pixels_mut() {
        pixel.0[..3].copy_from_slice(&rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#88c0d0"), Some([0x88, 0xc0, 0xd0]));
        assert_eq!(parse_hex_color("000000"), Some([0, 0, 0]));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("#fff").is_none());
        assert!(parse_hex_color("zzzzzz").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_tint_keeps_alpha() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([200, 10, 30, 128]));
        image.put_pixel(1, 0, Rgba([1, 2, 3, 0]));

        tint(&mut image, [0, 0, 0]);
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 128]));
        assert_eq!(image.get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
    }
}
