//! hslcolor provides an HSL color value with lossless conversions to linear
//! RGB, sRGB, HSV/HSB and the HSL bicone, plus luminance, luma and hue aware
//! interpolation.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod interpolate;
mod luminance;
mod math;
pub mod models;
mod ops;
mod quirks;

pub use color::{Channel, Color, Component, Space};
pub use error::{ColorError, Result};
pub use models::{Bicone, Hsba, Hsva, Model, Rgba, Srgba};
pub use quirks::Quirks;
