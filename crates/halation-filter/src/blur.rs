//! Gaussian kernel generation and direct 2D convolution.

use std::f64::consts::PI;

use rhizome_halation_color::Argb;
use rhizome_halation_pixmap::Pixmap;

use crate::error::FilterError;

/// Generates a normalized square Gaussian weight matrix.
///
/// `radius` is the side length of the matrix, not a geometric radius. The
/// weight at cell `(i, j)` is the isotropic Gaussian density at
/// `(i - radius/2, j - radius/2)` with `radius/2` in integer division, so
/// the center sits on the upper-left of true center for odd side lengths.
/// Weights are divided by their sum and add up to 1.
///
/// Fails with [`FilterError::InvalidParameter`] for a zero radius or a
/// non-finite or non-positive variance.
pub fn gaussian_kernel(radius: u32, variance: f64) -> Result<Vec<f64>, FilterError> {
    if radius == 0 {
        return Err(FilterError::InvalidParameter {
            name: "radius",
            value: radius as f64,
        });
    }
    if !variance.is_finite() || variance <= 0.0 {
        return Err(FilterError::InvalidParameter {
            name: "variance",
            value: variance,
        });
    }

    let side = radius as usize;
    let half = (radius / 2) as i32;
    let mut weights = vec![0.0f64; side * side];
    let mut sum = 0.0f64;
    for j in 0..side {
        for i in 0..side {
            let dx = (i as i32 - half) as f64;
            let dy = (j as i32 - half) as f64;
            let w = gaussian_density(dx, dy, variance);
            weights[i + j * side] = w;
            sum += w;
        }
    }
    for w in &mut weights {
        *w /= sum;
    }
    Ok(weights)
}

/// Isotropic 2D Gaussian density at `(x, y)`.
fn gaussian_density(x: f64, y: f64, variance: f64) -> f64 {
    1.0 / (2.0 * PI * variance * variance) * (-(x * x + y * y) / (2.0 * variance * variance)).exp()
}

/// Blurs an image with a direct 2D Gaussian convolution.
///
/// Every output pixel is the weighted sum of a `radius`-sided window of
/// source samples. Window coordinates past an edge are mirrored back into
/// the image, high side first, then low side, so both reflections can
/// combine on small images. Channel sums accumulate in f64 and are
/// truncated; the output is fully opaque.
///
/// The convolution is deliberately direct (`O(width·height·radius²)`): the
/// off-center kernel and the mirror padding make a separable two-pass
/// rewrite produce different pixels.
///
/// In addition to the [`gaussian_kernel`] parameter checks, fails with
/// [`FilterError::InvalidParameter`] when `radius/2 >= min(width, height)`,
/// the point past which a mirrored coordinate can escape the image.
pub fn gaussian_blur(src: &Pixmap, radius: u32, variance: f64) -> Result<Pixmap, FilterError> {
    let weights = gaussian_kernel(radius, variance)?;
    let (width, height) = src.dimensions();
    if radius / 2 >= width.min(height) {
        return Err(FilterError::InvalidParameter {
            name: "radius",
            value: radius as f64,
        });
    }

    let side = radius as usize;
    let half = (radius / 2) as i32;
    let max_x = width as i32 - 1;
    let max_y = height as i32 - 1;

    let mut out = src.same_size(Argb::TRANSPARENT);
    for y in 0..height {
        for x in 0..width {
            let mut red = 0.0f64;
            let mut green = 0.0f64;
            let mut blue = 0.0f64;
            for ky in 0..side {
                for kx in 0..side {
                    let mut sx = x as i32 + kx as i32 - half;
                    let mut sy = y as i32 + ky as i32 - half;
                    if sx > max_x {
                        sx = max_x - (sx - max_x);
                    }
                    if sx < 0 {
                        sx = -sx;
                    }
                    if sy > max_y {
                        sy = max_y - (sy - max_y);
                    }
                    if sy < 0 {
                        sy = -sy;
                    }

                    let weight = weights[kx + ky * side];
                    let c = src.get(sx as u32, sy as u32);
                    red += weight * c.r() as f64;
                    green += weight * c.g() as f64;
                    blue += weight * c.b() as f64;
                }
            }
            out.set(
                x,
                y,
                Argb::opaque_unchecked(red as i32, green as i32, blue as i32),
            );
        }
    }
    Ok(out)
}
