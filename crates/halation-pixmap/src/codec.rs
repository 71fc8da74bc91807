//! Decode/encode boundary.
//!
//! The surrounding system hands this crate encoded avatar bytes and expects
//! encoded bytes back for the outgoing message; everything in between works
//! on [`Pixmap`]s. Decoding sniffs the container format; encoding always
//! produces PNG.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use rhizome_halation_color::Argb;

use crate::{Pixmap, PixmapError};

/// Decodes encoded image bytes (any format the image crate can sniff) into
/// a buffer.
pub fn decode(bytes: &[u8]) -> Result<Pixmap, PixmapError> {
    let img = image::load_from_memory(bytes)?;
    from_image(&img)
}

/// Converts an already-decoded image into a buffer.
pub fn from_image(img: &DynamicImage) -> Result<Pixmap, PixmapError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let data = rgba
        .pixels()
        .map(|p| Argb::new(p.0[3], p.0[0], p.0[1], p.0[2]))
        .collect();
    Pixmap::from_raw(data, width, height)
}

/// Converts a buffer into an RGBA image for in-process interop.
pub fn to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (x, y, px) in img.enumerate_pixels_mut() {
        let c = pixmap.get(x, y);
        *px = image::Rgba([c.r(), c.g(), c.b(), c.a()]);
    }
    img
}

/// Encodes a buffer as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, PixmapError> {
    let mut bytes = Vec::new();
    to_image(pixmap).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pixmap() -> Pixmap {
        let data = vec![
            Argb::new(255, 10, 20, 30),
            Argb::new(128, 40, 50, 60),
            Argb::new(0, 70, 80, 90),
            Argb::new(255, 255, 255, 255),
        ];
        Pixmap::from_raw(data, 2, 2).unwrap()
    }

    #[test]
    fn test_png_roundtrip() {
        let original = test_pixmap();
        let bytes = encode_png(&original).unwrap();
        let back = decode(&bytes).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_image_interop_roundtrip() {
        let original = test_pixmap();
        let img = to_image(&original);
        let back = from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode(&[0x00, 0x01, 0x02, 0x03]),
            Err(PixmapError::Image(_))
        ));
    }
}
