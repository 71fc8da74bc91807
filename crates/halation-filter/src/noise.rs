//! Stochastic color perturbation.

use rand::Rng;
use rhizome_halation_color::{Argb, Hsb};
use rhizome_halation_pixmap::Pixmap;

/// Adds random color noise to an image.
///
/// For every pixel one uniform gate is drawn; pixels whose gate lands below
/// `dispersion` are perturbed, the rest are copied bit-for-bit. A perturbed
/// pixel gets a random color (uniform random hue and brightness at the
/// given `saturation`) scaled by `intensity` and added onto each channel,
/// then is forced opaque. Results above 255 clamp to 255; results below zero are
/// reflected to their absolute value rather than clamped, so a strongly
/// negative `intensity` brightens instead of flooring at black.
///
/// `dispersion` is the fraction of pixels affected, not a per-pixel blend
/// strength. The generator is caller-supplied so deterministic sequences
/// can be injected.
pub fn noise<R: Rng>(
    src: &Pixmap,
    intensity: f32,
    saturation: f32,
    dispersion: f32,
    rng: &mut R,
) -> Pixmap {
    let mut out = src.clone();
    for y in 0..src.height() {
        for x in 0..src.width() {
            if rng.random::<f64>() < dispersion as f64 {
                let hue = rng.random::<f32>();
                let brightness = rng.random::<f32>();
                let injected = Hsb::new(hue, saturation, brightness).to_argb();

                let c = src.get(x, y);
                let red = blend_channel(injected.r(), c.r(), intensity);
                let green = blend_channel(injected.g(), c.g(), intensity);
                let blue = blend_channel(injected.b(), c.b(), intensity);
                out.set(x, y, Argb::opaque_unchecked(red, green, blue));
            }
        }
    }
    out
}

/// One channel of the noise blend: truncate the float sum, clamp the top,
/// reflect the bottom.
fn blend_channel(injected: u8, original: u8, intensity: f32) -> i32 {
    let mut v = (injected as f32 * intensity + original as f32) as i32;
    if v > 255 {
        v = 255;
    }
    if v < 0 {
        v = -v;
    }
    v
}
