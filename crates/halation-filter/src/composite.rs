//! Channel-plane compositing with mirrored spatial offsets.

use rhizome_halation_color::Argb;
use rhizome_halation_pixmap::Pixmap;

use crate::error::FilterError;

/// A per-channel spatial offset, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelShift {
    /// Horizontal offset.
    pub dx: i32,
    /// Vertical offset.
    pub dy: i32,
}

impl ChannelShift {
    /// Creates a new shift.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Combines three channel planes into one opaque image.
///
/// The output takes the red plane's dimensions; green and blue must match.
/// For every output pixel each plane is sampled at `(x - dx, y - dy)`,
/// reflected back into range (see [`compose_rgb_single`] for the exact
/// rule), and contributes only its own channel byte: red from the red
/// plane, green from green, blue from blue.
pub fn compose_rgb(
    red: &Pixmap,
    red_shift: ChannelShift,
    green: &Pixmap,
    green_shift: ChannelShift,
    blue: &Pixmap,
    blue_shift: ChannelShift,
) -> Result<Pixmap, FilterError> {
    let expected = red.dimensions();
    for plane in [green, blue] {
        if plane.dimensions() != expected {
            return Err(FilterError::InvalidDimensions {
                expected,
                actual: plane.dimensions(),
            });
        }
    }
    check_shift(red_shift, expected, "red_shift")?;
    check_shift(green_shift, expected, "green_shift")?;
    check_shift(blue_shift, expected, "blue_shift")?;
    Ok(compose(red, red_shift, green, green_shift, blue, blue_shift))
}

/// Combines three offset samplings of one image into an opaque image.
///
/// Identical to [`compose_rgb`] with all three planes aliased to `src`:
/// each channel is read from its own offset/reflected coordinate, which
/// ghosts the channels apart like chromatic aberration.
///
/// An out-of-range coordinate `c` reflects as `-c` when negative, then as
/// `c - ((c - dim) * 2 + 1)` when past the far edge. The far-edge rule is
/// biased one pixel toward the interior; it is a different reflection than
/// the blur's, and the two are not interchangeable.
pub fn compose_rgb_single(
    src: &Pixmap,
    red_shift: ChannelShift,
    green_shift: ChannelShift,
    blue_shift: ChannelShift,
) -> Result<Pixmap, FilterError> {
    let dims = src.dimensions();
    check_shift(red_shift, dims, "red_shift")?;
    check_shift(green_shift, dims, "green_shift")?;
    check_shift(blue_shift, dims, "blue_shift")?;
    Ok(compose(src, red_shift, src, green_shift, src, blue_shift))
}

fn compose(
    red: &Pixmap,
    red_shift: ChannelShift,
    green: &Pixmap,
    green_shift: ChannelShift,
    blue: &Pixmap,
    blue_shift: ChannelShift,
) -> Pixmap {
    let (width, height) = red.dimensions();
    let mut out = red.same_size(Argb::TRANSPARENT);
    for y in 0..height {
        for x in 0..width {
            let rx = reflect(x as i32 - red_shift.dx, width);
            let ry = reflect(y as i32 - red_shift.dy, height);
            let gx = reflect(x as i32 - green_shift.dx, width);
            let gy = reflect(y as i32 - green_shift.dy, height);
            let bx = reflect(x as i32 - blue_shift.dx, width);
            let by = reflect(y as i32 - blue_shift.dy, height);

            let r = red.get(rx, ry).0 & 0x00FF_0000;
            let g = green.get(gx, gy).0 & 0x0000_FF00;
            let b = blue.get(bx, by).0 & 0x0000_00FF;
            out.set(x, y, Argb(0xFF00_0000 | r | g | b));
        }
    }
    out
}

/// Reflects a sample coordinate back into `0..dim`, low side first.
fn reflect(mut c: i32, dim: u32) -> u32 {
    if c < 0 {
        c = -c;
    }
    let dim = dim as i32;
    if c >= dim {
        c -= (c - dim) * 2 + 1;
    }
    c as u32
}

/// An offset is usable when one pass of the reflection rule lands every
/// sample inside the plane: `-dim <= d <= 2*dim - 1` per axis.
fn check_shift(
    shift: ChannelShift,
    (width, height): (u32, u32),
    name: &'static str,
) -> Result<(), FilterError> {
    let ok = |d: i32, dim: u32| d >= -(dim as i32) && d <= 2 * dim as i32 - 1;
    if !ok(shift.dx, width) || !ok(shift.dy, height) {
        return Err(FilterError::InvalidParameter {
            name,
            value: if ok(shift.dx, width) {
                shift.dy as f64
            } else {
                shift.dx as f64
            },
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhizome_halation_pixmap::Pixmap;

    /// 4x4 image whose red channel uniquely marks each pixel.
    fn marker() -> Pixmap {
        let mut data = Vec::with_capacity(16);
        for y in 0..4u32 {
            for x in 0..4u32 {
                data.push(Argb::opaque((10 * (x + y * 4)) as u8, 0, 0));
            }
        }
        Pixmap::from_raw(data, 4, 4).unwrap()
    }

    #[test]
    fn test_reflect_low_side() {
        assert_eq!(reflect(-1, 4), 1);
        assert_eq!(reflect(-3, 4), 3);
    }

    #[test]
    fn test_reflect_high_side_is_biased() {
        // Past the far edge the reflection skips the edge pixel itself.
        assert_eq!(reflect(4, 4), 3);
        assert_eq!(reflect(5, 4), 2);
        assert_eq!(reflect(7, 4), 0);
    }

    #[test]
    fn test_reflect_combines_both_sides() {
        // -5 flips to 5, which then reflects off the far edge to 2.
        assert_eq!(reflect(-5, 4), 2);
    }

    #[test]
    fn test_zero_shift_recombines_planes() {
        let src = marker();
        let zero = ChannelShift::default();
        let out = compose_rgb(&src, zero, &src, zero, &src, zero).unwrap();
        for (a, b) in src.pixels().iter().zip(out.pixels()) {
            assert_eq!((b.r(), b.g(), b.b()), (a.r(), a.g(), a.b()));
            assert_eq!(b.a(), 255);
        }
    }

    #[test]
    fn test_shift_beyond_width_samples_reflected_column() {
        let src = marker();
        let out = compose_rgb_single(
            &src,
            ChannelShift::new(5, 0),
            ChannelShift::default(),
            ChannelShift::default(),
        )
        .unwrap();
        // x - 5 over a 4-wide row lands on columns [2, 3, 3, 2].
        for y in 0..4 {
            for (x, &col) in [2u32, 3, 3, 2].iter().enumerate() {
                assert_eq!(out.get(x as u32, y).r(), src.get(col, y).r());
            }
        }
    }

    #[test]
    fn test_planes_feed_only_their_own_channel() {
        let red = Pixmap::filled(2, 2, Argb::opaque(11, 99, 99)).unwrap();
        let green = Pixmap::filled(2, 2, Argb::opaque(99, 22, 99)).unwrap();
        let blue = Pixmap::filled(2, 2, Argb::opaque(99, 99, 33)).unwrap();
        let zero = ChannelShift::default();
        let out = compose_rgb(&red, zero, &green, zero, &blue, zero).unwrap();
        assert!(out.pixels().iter().all(|&c| c == Argb::opaque(11, 22, 33)));
    }

    #[test]
    fn test_mismatched_planes_rejected() {
        let a = Pixmap::filled(4, 4, Argb::BLACK).unwrap();
        let b = Pixmap::filled(4, 3, Argb::BLACK).unwrap();
        let zero = ChannelShift::default();
        assert!(matches!(
            compose_rgb(&a, zero, &b, zero, &a, zero),
            Err(FilterError::InvalidDimensions {
                expected: (4, 4),
                actual: (4, 3)
            })
        ));
    }

    #[test]
    fn test_shift_bounds() {
        let src = marker();
        let zero = ChannelShift::default();
        // 2*dim - 1 still reflects into range; 2*dim does not.
        assert!(compose_rgb_single(&src, ChannelShift::new(7, 0), zero, zero).is_ok());
        assert!(matches!(
            compose_rgb_single(&src, ChannelShift::new(8, 0), zero, zero),
            Err(FilterError::InvalidParameter {
                name: "red_shift",
                ..
            })
        ));
        // -dim holds on the negative side; one past it escapes.
        assert!(compose_rgb_single(&src, zero, ChannelShift::new(0, -4), zero).is_ok());
        assert!(matches!(
            compose_rgb_single(&src, zero, ChannelShift::new(0, -5), zero),
            Err(FilterError::InvalidParameter {
                name: "green_shift",
                ..
            })
        ));
    }
}
