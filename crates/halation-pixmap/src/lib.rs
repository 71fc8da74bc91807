//! Packed-ARGB pixel buffers.
//!
//! Provides [`Pixmap`], the rectangular buffer every halation filter reads
//! and writes, and the decode/encode boundary for getting avatars in and
//! filtered frames back out ([`decode`], [`encode_png`]).
//!
//! Buffers are immutable by convention: filters allocate a new `Pixmap` and
//! fill it, leaving their inputs untouched, so one decoded source can feed
//! any number of derived filter chains.
//!
//! # Example
//!
//! ```
//! use rhizome_halation_pixmap::Pixmap;
//! use rhizome_halation_color::Argb;
//!
//! let p = Pixmap::filled(4, 3, Argb::opaque(10, 20, 30))?;
//! assert_eq!(p.dimensions(), (4, 3));
//! assert_eq!(p.get(2, 1), Argb::opaque(10, 20, 30));
//! # Ok::<(), rhizome_halation_pixmap::PixmapError>(())
//! ```

mod codec;
mod error;

pub use codec::{decode, encode_png, from_image, to_image};
pub use error::PixmapError;

use rhizome_halation_color::Argb;

/// A rectangular buffer of packed ARGB pixels.
///
/// Row-major with the origin at the top left: the pixel at `(x, y)` lives at
/// linear index `x + y * width`. Construction guarantees `width > 0`,
/// `height > 0` and `data.len() == width * height`; every accessor relies on
/// those invariants.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<Argb>,
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Pixmap {
    /// Creates a buffer filled with one color.
    pub fn filled(width: u32, height: u32, color: Argb) -> Result<Self, PixmapError> {
        if width == 0 || height == 0 {
            return Err(PixmapError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![color; (width as usize) * (height as usize)],
        })
    }

    /// Creates a buffer from raw row-major pixel data.
    pub fn from_raw(data: Vec<Argb>, width: u32, height: u32) -> Result<Self, PixmapError> {
        if width == 0 || height == 0 {
            return Err(PixmapError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(PixmapError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns a new buffer with this buffer's dimensions, filled with
    /// `fill`. Infallible because this buffer's dimensions are already
    /// known valid.
    pub fn same_size(&self, fill: Argb) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![fill; self.data.len()],
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Argb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[(x + y * self.width) as usize]
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Argb) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[(x + y * self.width) as usize] = color;
    }

    /// The pixels in row-major order.
    pub fn pixels(&self) -> &[Argb] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let p = Pixmap::filled(3, 2, Argb::opaque(1, 2, 3)).unwrap();
        assert_eq!(p.dimensions(), (3, 2));
        assert_eq!(p.pixels().len(), 6);
        assert!(p.pixels().iter().all(|&c| c == Argb::opaque(1, 2, 3)));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Pixmap::filled(0, 4, Argb::BLACK),
            Err(PixmapError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(matches!(
            Pixmap::from_raw(vec![], 4, 0),
            Err(PixmapError::InvalidDimensions { width: 4, height: 0 })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let data = vec![Argb::BLACK; 5];
        assert!(matches!(
            Pixmap::from_raw(data, 2, 3),
            Err(PixmapError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_row_major_indexing() {
        let data = (0..6u32).map(Argb).collect();
        let p = Pixmap::from_raw(data, 3, 2).unwrap();
        assert_eq!(p.get(0, 0), Argb(0));
        assert_eq!(p.get(2, 0), Argb(2));
        assert_eq!(p.get(0, 1), Argb(3));
        assert_eq!(p.get(2, 1), Argb(5));
    }

    #[test]
    fn test_set_does_not_touch_neighbors() {
        let mut p = Pixmap::filled(2, 2, Argb::TRANSPARENT).unwrap();
        p.set(1, 0, Argb::WHITE);
        assert_eq!(p.get(1, 0), Argb::WHITE);
        assert_eq!(p.get(0, 0), Argb::TRANSPARENT);
        assert_eq!(p.get(0, 1), Argb::TRANSPARENT);
        assert_eq!(p.get(1, 1), Argb::TRANSPARENT);
    }

    #[test]
    fn test_same_size() {
        let p = Pixmap::filled(4, 5, Argb::WHITE).unwrap();
        let q = p.same_size(Argb::BLACK);
        assert_eq!(q.dimensions(), (4, 5));
        assert!(q.pixels().iter().all(|&c| c == Argb::BLACK));
    }
}
