//! Each representation a [`Color`] converts to is modeled with its own
//! four component type: three components followed by alpha.
//!
//! ```rust
//! use hslcolor::{Color, Model, Rgba};
//! let rgba = Rgba::from_slice(&[0.0, 0.0, 1.0]).unwrap();
//! assert_eq!(rgba.to_color().unwrap(), Color::BLUE);
//! ```

use crate::{color::Color, Result};

pub mod bicone;
pub mod hsv;
pub mod rgb;

pub use bicone::Bicone;
pub use hsv::{Hsba, Hsva};
pub use rgb::{Rgba, Srgba};

/// A trait implemented for color representations that can be converted to
/// and from a [`Color`].
pub trait Model: Sized {
    /// Derive this representation from a [`Color`].
    fn from_color(color: &Color) -> Result<Self>;

    /// Convert this representation into a [`Color`], validating every
    /// component first.
    fn to_color(&self) -> Result<Color>;
}
