//! Alpha-gated mask overlay with nearest-neighbor region scaling.

use rhizome_halation_color::Argb;
use rhizome_halation_pixmap::Pixmap;

use crate::error::FilterError;

/// The destination-space rectangle the full mask image is scaled onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskRegion {
    /// Left edge in destination space.
    pub x: i32,
    /// Top edge in destination space.
    pub y: i32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
}

impl MaskRegion {
    /// Creates a new region.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Blends a mask into every non-opaque pixel of a destination image.
///
/// The output starts as a copy of `dest`. Wherever the destination's own
/// alpha is below 255, the mask is blended in with the destination alpha
/// as weight: the less opaque the destination pixel, the more mask shows
/// through. The mask is nearest-neighbor-scaled so that `region` in
/// destination space covers the whole mask image. Blended pixels come out fully opaque;
/// already-opaque pixels pass through untouched.
///
/// Mask sample coordinates for destination pixels outside `region` are
/// clamped to the mask edges.
///
/// Fails with [`FilterError::InvalidParameter`] when the region is empty.
pub fn apply_mask(dest: &Pixmap, mask: &Pixmap, region: MaskRegion) -> Result<Pixmap, FilterError> {
    if region.width == 0 {
        return Err(FilterError::InvalidParameter {
            name: "region.width",
            value: 0.0,
        });
    }
    if region.height == 0 {
        return Err(FilterError::InvalidParameter {
            name: "region.height",
            value: 0.0,
        });
    }

    let (mask_w, mask_h) = mask.dimensions();
    let mut out = dest.clone();
    for y in 0..dest.height() {
        for x in 0..dest.width() {
            let c = dest.get(x, y);
            let alpha = c.a() as i32;
            if alpha < 255 {
                let mx = scale_coord(x as i64 - region.x as i64, mask_w, region.width);
                let my = scale_coord(y as i64 - region.y as i64, mask_h, region.height);
                let m = mask.get(mx, my);

                let red = (m.r() as i32 * (255 - alpha) + c.r() as i32 * alpha) / 255;
                let green = (m.g() as i32 * (255 - alpha) + c.g() as i32 * alpha) / 255;
                let blue = (m.b() as i32 * (255 - alpha) + c.b() as i32 * alpha) / 255;
                out.set(x, y, Argb::opaque_unchecked(red, green, blue));
            }
        }
    }
    Ok(out)
}

/// Maps a region-relative coordinate onto the mask axis, clamped to its
/// edges.
fn scale_coord(offset: i64, mask_dim: u32, region_dim: u32) -> u32 {
    let scaled = offset * mask_dim as i64 / region_dim as i64;
    scaled.clamp(0, mask_dim as i64 - 1) as u32
}
