//! Model a color with the HSV (hue, saturation, value) notation, also known
//! as HSB (hue, saturation, brightness).

use crate::{
    color::{Color, Component},
    math::{check_unit, clamp_unit},
    models::Model,
    Result,
};

hslcolor_macros::gen_model! {
    /// A color specified with the HSV notation.
    pub struct Hsva {
        /// The hue component of the color, shared with HSL.
        pub hue: Component,
        /// The HSV saturation, which differs from the HSL saturation.
        pub saturation: Component,
        /// The value (brightness) component of the color.
        pub value: Component,
    }
}

/// HSB is HSV under another name.
pub type Hsba = Hsva;

impl From<&Color> for Hsva {
    fn from(color: &Color) -> Self {
        let (lightness, saturation) = (color.lightness, color.saturation);

        let value = lightness + saturation * lightness.min(1.0 - lightness);
        let saturation = if value == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - lightness / value)
        };

        Hsva::new(color.hue, saturation, value, color.alpha)
    }
}

impl Model for Hsva {
    fn from_color(color: &Color) -> Result<Self> {
        Ok(Self::from(color))
    }

    fn to_color(&self) -> Result<Color> {
        const OPERATION: &str = "Color::from_hsva";

        let hue = check_unit(OPERATION, "hue", self.hue)?;
        let saturation = check_unit(OPERATION, "saturation", self.saturation)?;
        let value = check_unit(OPERATION, "value", self.value)?;
        let alpha = check_unit(OPERATION, "alpha", self.alpha)?;

        let lightness = value * (1.0 - saturation / 2.0);
        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            clamp_unit((value - lightness) / lightness.min(1.0 - lightness))
        };

        Ok(Color::from_parts(hue, saturation, lightness, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::ColorError};

    #[test]
    fn pure_red() {
        let hsva = Color::RED.to_hsva();
        assert_eq!(hsva.hue, 0.0);
        assert_component_eq!(hsva.saturation, 1.0);
        assert_component_eq!(hsva.value, 1.0);
        assert_eq!(hsva.alpha, 1.0);
    }

    #[test]
    fn black_has_no_saturation() {
        let hsva = Color::new(0.3, 1.0, 0.0, 1.0).unwrap().to_hsva();
        assert_eq!(hsva.value, 0.0);
        assert_eq!(hsva.saturation, 0.0);
    }

    #[test]
    fn both_poles_have_no_saturation() {
        // Value 0 lands on black.
        let black = Hsva::new(0.5, 1.0, 0.0, 1.0).to_color().unwrap();
        assert_eq!(black.lightness(), 0.0);
        assert_eq!(black.saturation(), 0.0);

        // Saturation 0 with value 1 lands on white.
        let white = Hsva::new(0.5, 0.0, 1.0, 1.0).to_color().unwrap();
        assert_eq!(white.lightness(), 1.0);
        assert_eq!(white.saturation(), 0.0);
    }

    #[test]
    fn pastel() {
        // hsl(200, 60%, 70%) is hsv(200, 40.909%, 88%).
        let color = Color::new(200.0 / 360.0, 0.6, 0.7, 1.0).unwrap();
        let hsva = color.to_hsva();
        assert_component_eq!(hsva.saturation, 0.409091);
        assert_component_eq!(hsva.value, 0.88);

        let back = hsva.to_color().unwrap();
        assert_component_eq!(back.saturation(), 0.6);
        assert_component_eq!(back.lightness(), 0.7);
    }

    #[test]
    fn validates_components() {
        assert!(matches!(
            Color::from_hsva(0.0, 0.0, 1.5, 1.0),
            Err(ColorError::Range {
                component: "value",
                ..
            })
        ));
        assert_eq!(
            Hsba::from_slice(&[0.0]),
            Err(ColorError::Arity {
                operation: "hsva::from_slice",
                expected: 3..=4,
                actual: 1,
            })
        );
    }
}
