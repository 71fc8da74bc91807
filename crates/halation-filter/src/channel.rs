//! Grayscale conversion and per-channel multiplication.

use rhizome_halation_color::Argb;
use rhizome_halation_pixmap::Pixmap;

/// Converts an image to opaque grayscale.
///
/// Luma is `trunc(R*0.299) + trunc(G*0.587) + trunc(B*0.114)`: each
/// weighted term is truncated independently before the sum, matching the
/// integer pipeline the other filters expect.
pub fn grayscale(src: &Pixmap) -> Pixmap {
    let mut out = src.same_size(Argb::TRANSPARENT);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let c = src.get(x, y);
            let luma = (c.r() as f32 * 0.299) as i32
                + (c.g() as f32 * 0.587) as i32
                + (c.b() as f32 * 0.114) as i32;
            out.set(x, y, Argb::opaque_unchecked(luma, luma, luma));
        }
    }
    out
}

/// Multiplies each color channel by its factor, forcing the output opaque.
///
/// Products are truncated, never clamped: factors above 1 overflow the
/// 8-bit field and negative factors spill sign bits into the neighboring
/// fields. Range discipline is the caller's responsibility.
pub fn multiply(src: &Pixmap, r_factor: f32, g_factor: f32, b_factor: f32) -> Pixmap {
    let mut out = src.same_size(Argb::TRANSPARENT);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let c = src.get(x, y);
            let red = (c.r() as f32 * r_factor) as i32;
            let green = (c.g() as f32 * g_factor) as i32;
            let blue = (c.b() as f32 * b_factor) as i32;
            out.set(x, y, Argb::opaque_unchecked(red, green, blue));
        }
    }
    out
}

/// Isolates the red channel, zeroing green and blue.
pub fn red_mask(src: &Pixmap) -> Pixmap {
    multiply(src, 1.0, 0.0, 0.0)
}

/// Isolates the green channel, zeroing red and blue.
pub fn green_mask(src: &Pixmap) -> Pixmap {
    multiply(src, 0.0, 1.0, 0.0)
}

/// Isolates the blue channel, zeroing red and green.
pub fn blue_mask(src: &Pixmap) -> Pixmap {
    multiply(src, 0.0, 0.0, 1.0)
}
