use euclid::{default::Vector2D, Angle};
use tracing::{debug, trace};

use crate::{
    color::{Color, Component},
    math::{check_unit, lerp},
    quirks::Quirks,
    Result,
};

type HueVector = Vector2D<Component>;

impl Color {
    /// Interpolate from this color to another using `weight` as the progress
    /// between them: 0 yields this color and 1 yields `other`.
    ///
    /// Saturation, lightness and alpha are blended linearly. Hue is blended
    /// on the color wheel, so it takes the shorter way around.
    pub fn interpolate(&self, other: &Self, weight: Component) -> Result<Color> {
        self.interpolate_with(other, weight, Quirks::empty())
    }

    /// Blend this color and another evenly.
    pub fn mix(&self, other: &Self) -> Result<Color> {
        self.interpolate(other, 0.5)
    }

    /// Interpolate like [`Color::interpolate`], honoring
    /// [`Quirks::SUMMED_HUE_WEIGHT`] and [`Quirks::SINGLE_QUADRANT_HUE`].
    ///
    /// With both quirks the mixed hue is only meaningful when the two hues lie
    /// within a quarter turn of 0° or 180°, and a weight of 0 loses the hue
    /// entirely.
    pub fn interpolate_with(
        &self,
        other: &Self,
        weight: Component,
        quirks: Quirks,
    ) -> Result<Color> {
        let weight = check_unit("Color::interpolate", "weight", weight)?;
        trace!(from = %self, to = %other, weight, "interpolate");

        let from = HueVector::from_angle_and_length(self.hue_angle(), 1.0);
        let to = HueVector::from_angle_and_length(other.hue_angle(), 1.0);

        let mixed = if quirks.contains(Quirks::SUMMED_HUE_WEIGHT) {
            (from + to) * weight
        } else {
            from.lerp(to, weight)
        };

        // Opposite hues cancel out and leave no direction to recover.
        let angle = if mixed.square_length() <= Component::EPSILON {
            Angle::zero()
        } else if quirks.contains(Quirks::SINGLE_QUADRANT_HUE) {
            debug!(x = mixed.x, y = mixed.y, "single quadrant hue");
            Angle::radians((mixed.y / mixed.x).atan())
        } else {
            Angle::radians(mixed.y.atan2(mixed.x))
        };

        let mut color = Color::from_parts(
            0.0,
            lerp(self.saturation, other.saturation, weight),
            lerp(self.lightness, other.lightness, weight),
            lerp(self.alpha, other.alpha, weight),
        );
        color.set_hue_angle(angle);

        Ok(color)
    }
}
