//! Relative luminance and luma with the ITU-R BT.709 weights.
//!
//! Luminance weighs the linear RGB channels. Luma weighs the gamma encoded
//! channels instead, so the two agree for black and white and drift apart in
//! between.

use crate::{
    color::{Color, Component},
    math::Components,
    models::Rgba,
    Result,
};

/// BT.709 weights for red, green and blue.
const WEIGHTS: Components = Components(0.2126, 0.7152, 0.0722);

fn weighted(rgba: &Rgba) -> Component {
    WEIGHTS.0 * rgba.red + WEIGHTS.1 * rgba.green + WEIGHTS.2 * rgba.blue
}

impl Color {
    /// The relative luminance of this color, computed from linear RGB.
    pub fn luminance(&self) -> Result<Component> {
        Ok(weighted(&self.to_rgba()?))
    }

    /// The luma of this color, computed from the gamma encoded channels.
    ///
    /// The sRGB channels are read back as if they were linear and the
    /// luminance of the resulting color is returned.
    pub fn luma(&self) -> Result<Component> {
        let srgba = self.to_srgba()?;
        Color::from_rgba(srgba.red, srgba.green, srgba.blue, srgba.alpha)?.luminance()
    }
}
