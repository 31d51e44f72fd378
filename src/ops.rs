//! Component-wise arithmetic between two colors.
//!
//! Every result component is clamped into `[0, 1]`, hue included: these
//! operations treat the hue as a plain number rather than an angle.

use crate::{
    color::{Channel, Color, Component},
    error::ColorError,
    math::clamp_unit,
    Result,
};

impl Color {
    fn zip_with(&self, other: &Self, f: impl Fn(Component, Component) -> Component) -> Self {
        Color::from_parts(
            clamp_unit(f(self.hue, other.hue)),
            clamp_unit(f(self.saturation, other.saturation)),
            clamp_unit(f(self.lightness, other.lightness)),
            clamp_unit(f(self.alpha, other.alpha)),
        )
    }

    /// Add `other` component by component.
    pub fn saturating_add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtract `other` component by component.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply by `other` component by component.
    pub fn saturating_mul(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    /// Divide by `other` component by component. Fails before dividing
    /// anything if a component of `other` is zero, naming the first one.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if let Some(channel) = Channel::ALL
            .into_iter()
            .find(|&channel| other.channel(channel) == 0.0)
        {
            return Err(ColorError::DivisionByZero(channel));
        }

        Ok(self.zip_with(other, |a, b| a / b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn add_and_sub_clamp() {
        let a = Color::new(0.7, 0.5, 0.25, 0.5).unwrap();
        let b = Color::new(0.5, 0.25, 0.25, 0.75).unwrap();

        assert_eq!(a.saturating_add(&b).to_array(), [1.0, 0.75, 0.5, 1.0]);

        let diff = a.saturating_sub(&b);
        assert_component_eq!(diff.hue(), 0.2);
        assert_eq!(diff.saturation(), 0.25);
        assert_eq!(diff.lightness(), 0.0);
        assert_eq!(diff.alpha(), 0.0);
    }

    #[test]
    fn mul() {
        let a = Color::new(0.5, 0.5, 1.0, 0.2).unwrap();
        let b = Color::new(0.5, 0.0, 0.5, 1.0).unwrap();
        assert_eq!(a.saturating_mul(&b).to_array(), [0.25, 0.0, 0.5, 0.2]);
    }

    #[test]
    fn div_clamps() {
        let a = Color::new(0.5, 0.5, 0.8, 0.2).unwrap();
        let b = Color::new(0.25, 1.0, 0.4, 0.4).unwrap();
        assert_eq!(a.checked_div(&b).unwrap().to_array(), [1.0, 0.5, 1.0, 0.5]);
    }

    #[test]
    fn div_by_zero_names_the_component() {
        let a = Color::WHITE;

        let divisor = Color::new(0.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(
            a.checked_div(&divisor),
            Err(ColorError::DivisionByZero(Channel::Hue))
        );

        let divisor = Color::new(0.5, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(
            a.checked_div(&divisor),
            Err(ColorError::DivisionByZero(Channel::Saturation))
        );

        let divisor = Color::new(0.5, 1.0, 0.0, 1.0).unwrap();
        assert_eq!(
            a.checked_div(&divisor),
            Err(ColorError::DivisionByZero(Channel::Lightness))
        );

        assert_eq!(
            a.checked_div(&Color::new(0.5, 1.0, 1.0, 0.0).unwrap()),
            Err(ColorError::DivisionByZero(Channel::Alpha))
        );

        // Hue is checked first.
        assert_eq!(
            a.checked_div(&Color::CLEAR),
            Err(ColorError::DivisionByZero(Channel::Hue))
        );
    }
}
