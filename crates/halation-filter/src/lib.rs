//! Stateless raster filters over packed-ARGB buffers.
//!
//! Every operation is a pure function from a [`Pixmap`](rhizome_halation_pixmap::Pixmap)
//! plus scalar parameters to a new `Pixmap`; inputs are never mutated, so a
//! single decoded source can feed any number of derived chains. There is no
//! filter graph or dispatch layer: compose operations with ordinary
//! function calls.
//!
//! # Example
//!
//! The avatar glitch chain: desaturate, speckle, dim, then ghost the
//! channel planes apart with the red plane blurred.
//!
//! ```
//! use rhizome_halation_color::Argb;
//! use rhizome_halation_filter::{
//!     ChannelShift, blue_mask, compose_rgb, gaussian_blur, grayscale, green_mask, multiply,
//!     noise, red_mask,
//! };
//! use rhizome_halation_pixmap::Pixmap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let avatar = Pixmap::filled(32, 32, Argb::opaque(180, 90, 40))?;
//! let mut rng = rand::rng();
//!
//! let gray = multiply(
//!     &noise(&grayscale(&avatar), 0.15, 0.0, 1.0, &mut rng),
//!     0.75,
//!     0.75,
//!     0.75,
//! );
//! let red = gaussian_blur(&red_mask(&gray), 5, 2.5)?;
//! let out = compose_rgb(
//!     &red,
//!     ChannelShift::new(-2, 0),
//!     &green_mask(&gray),
//!     ChannelShift::new(2, -1),
//!     &blue_mask(&gray),
//!     ChannelShift::new(2, -1),
//! )?;
//! assert_eq!(out.dimensions(), avatar.dimensions());
//! # Ok(())
//! # }
//! ```

mod blur;
mod channel;
mod composite;
mod error;
mod mask;
mod noise;

pub use blur::{gaussian_blur, gaussian_kernel};
pub use channel::{blue_mask, grayscale, green_mask, multiply, red_mask};
pub use composite::{ChannelShift, compose_rgb, compose_rgb_single};
pub use error::FilterError;
pub use mask::{MaskRegion, apply_mask};
pub use noise::noise;
