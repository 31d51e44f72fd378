//! Model a color in the HSL bicone: hue, chroma and lightness.
//!
//! Chroma is the spread between the largest and the smallest RGB channel. It
//! is the HSL saturation scaled by the width of the bicone at the color's
//! lightness, so it shrinks to zero towards black and white.

use crate::{
    color::{Color, Component},
    math::{check_unit, clamp_unit},
    models::Model,
    Result,
};

hslcolor_macros::gen_model! {
    /// A color specified in the HSL bicone.
    pub struct Bicone {
        /// The hue component of the color, shared with HSL.
        pub hue: Component,
        /// The spread between the largest and smallest RGB channel.
        pub chroma: Component,
        /// The lightness component of the color, shared with HSL.
        pub lightness: Component,
    }
}

impl Bicone {
    /// Whether the lightness sits on one of the two tips of the bicone, where
    /// there is no room for chroma.
    pub fn is_at_pole(&self) -> bool {
        self.lightness == 0.0 || self.lightness == 1.0
    }
}

impl Model for Bicone {
    fn from_color(color: &Color) -> Result<Self> {
        let rgba = color.to_rgba()?;
        let chroma = rgba.red.max(rgba.green).max(rgba.blue)
            - rgba.red.min(rgba.green).min(rgba.blue);

        Ok(Bicone::new(color.hue, chroma, color.lightness, color.alpha))
    }

    fn to_color(&self) -> Result<Color> {
        const OPERATION: &str = "Color::from_bicone";

        let hue = check_unit(OPERATION, "hue", self.hue)?;
        let chroma = check_unit(OPERATION, "chroma", self.chroma)?;
        let lightness = check_unit(OPERATION, "lightness", self.lightness)?;
        let alpha = check_unit(OPERATION, "alpha", self.alpha)?;

        let saturation = if self.is_at_pole() {
            0.0
        } else {
            let width = (1.0 - (2.0 * lightness - 1.0).abs()).max(0.0);
            clamp_unit(chroma / width)
        };

        Ok(Color::from_parts(hue, saturation, lightness, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::ColorError};

    #[test]
    fn chroma_of_primaries() {
        let bicone = Color::RED.to_bicone().unwrap();
        assert_eq!(bicone.hue, 0.0);
        assert_component_eq!(bicone.chroma, 1.0);
        assert_eq!(bicone.lightness, 0.5);

        let bicone = Color::GRAY.to_bicone().unwrap();
        assert_eq!(bicone.chroma, 0.0);
    }

    #[test]
    fn chroma_shrinks_towards_the_poles() {
        let light = Color::new(0.0, 1.0, 0.75, 1.0).unwrap();
        assert_component_eq!(light.to_bicone().unwrap().chroma, 0.5);

        let dark = Color::new(0.0, 1.0, 0.25, 1.0).unwrap();
        assert_component_eq!(dark.to_bicone().unwrap().chroma, 0.5);
    }

    #[test]
    fn saturation_from_chroma() {
        let color = Color::from_bicone(0.25, 0.5, 0.75, 0.5).unwrap();
        assert_eq!(color.hue(), 0.25);
        assert_component_eq!(color.saturation(), 1.0);
        assert_eq!(color.lightness(), 0.75);
        assert_eq!(color.alpha(), 0.5);

        // Too much chroma for the lightness saturates.
        let color = Color::from_bicone(0.25, 1.0, 0.9, 1.0).unwrap();
        assert_eq!(color.saturation(), 1.0);
    }

    #[test]
    fn poles_keep_hue_lightness_and_alpha() {
        let color = Color::from_bicone(0.4, 0.3, 0.0, 0.6).unwrap();
        assert_eq!(color.to_array(), [0.4, 0.0, 0.0, 0.6]);

        let color = Color::from_bicone(0.4, 0.3, 1.0, 0.6).unwrap();
        assert_eq!(color.to_array(), [0.4, 0.0, 1.0, 0.6]);
    }

    #[test]
    fn validates_components() {
        assert!(matches!(
            Color::from_bicone(0.0, 1.1, 0.5, 1.0),
            Err(ColorError::Range {
                component: "chroma",
                ..
            })
        ));
    }
}
