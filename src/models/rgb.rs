//! Model a color with red, green and blue channels, either linear or gamma
//! encoded with the sRGB transfer function.

use tracing::debug;

use crate::{
    color::{Color, Component},
    convert::util,
    math::{check_unit, Components},
    models::Model,
    quirks::{Quirks, SRGB_ENCODE_CUTOFF},
    Result,
};

hslcolor_macros::gen_model! {
    /// A color with linear red, green and blue channels.
    pub struct Rgba {
        /// The red channel.
        pub red: Component,
        /// The green channel.
        pub green: Component,
        /// The blue channel.
        pub blue: Component,
    }
}

hslcolor_macros::gen_model! {
    /// A color with red, green and blue channels gamma encoded for display.
    pub struct Srgba {
        /// The red channel.
        pub red: Component,
        /// The green channel.
        pub green: Component,
        /// The blue channel.
        pub blue: Component,
    }
}

mod gamma {
    use crate::color::Component;

    /// Linear segment cutoff of the sRGB decoder.
    const DECODE_CUTOFF: Component = 0.04045;

    /// Encode a single linear channel. `cutoff` is where the linear segment
    /// ends.
    pub fn encode(value: Component, cutoff: Component) -> Component {
        if value <= cutoff {
            12.92 * value
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    }

    /// Decode a single gamma encoded channel.
    pub fn decode(value: Component) -> Component {
        if value <= DECODE_CUTOFF {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }
}

impl Rgba {
    fn channels(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    /// Apply the sRGB transfer function to each channel. Alpha is linear and
    /// passes through.
    pub fn to_gamma_encoded(&self) -> Srgba {
        self.to_gamma_encoded_with(Quirks::empty())
    }

    /// Apply the sRGB transfer function to each channel, honoring
    /// [`Quirks::LEGACY_SRGB_CUTOFF`].
    pub fn to_gamma_encoded_with(&self, quirks: Quirks) -> Srgba {
        let cutoff = quirks.srgb_encode_cutoff();
        let channels = self.channels();

        if cutoff != SRGB_ENCODE_CUTOFF {
            let affected = [channels.0, channels.1, channels.2]
                .into_iter()
                .any(|value| value > cutoff && value <= SRGB_ENCODE_CUTOFF);
            if affected {
                debug!(rgba = ?self, cutoff, "encoding with the legacy sRGB cutoff");
            }
        }

        let Components(red, green, blue) = channels.map(|value| gamma::encode(value, cutoff));
        Srgba::new(red, green, blue, self.alpha)
    }

    /// Format as `#RRGGBBAA`, each channel scaled to `[0, 255]` and rounded
    /// half to even.
    pub fn to_hex_string(&self) -> String {
        let byte = |value: Component| (value.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha)
        )
    }
}

impl Model for Rgba {
    fn from_color(color: &Color) -> Result<Self> {
        color.to_rgba()
    }

    fn to_color(&self) -> Result<Color> {
        const OPERATION: &str = "Color::from_rgba";

        check_unit(OPERATION, "red", self.red)?;
        check_unit(OPERATION, "green", self.green)?;
        check_unit(OPERATION, "blue", self.blue)?;
        check_unit(OPERATION, "alpha", self.alpha)?;

        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.channels());
        Ok(Color::from_parts(hue, saturation, lightness, self.alpha))
    }
}

impl Srgba {
    /// Remove the sRGB transfer function from each channel. Alpha passes
    /// through.
    pub fn to_linear_light(&self) -> Rgba {
        let Components(red, green, blue) =
            Components(self.red, self.green, self.blue).map(gamma::decode);
        Rgba::new(red, green, blue, self.alpha)
    }
}

impl Model for Srgba {
    fn from_color(color: &Color) -> Result<Self> {
        color.to_srgba()
    }

    fn to_color(&self) -> Result<Color> {
        const OPERATION: &str = "Color::from_srgba";

        check_unit(OPERATION, "red", self.red)?;
        check_unit(OPERATION, "green", self.green)?;
        check_unit(OPERATION, "blue", self.blue)?;
        check_unit(OPERATION, "alpha", self.alpha)?;

        self.to_linear_light().to_color()
    }
}

impl Color {
    /// Format the linear RGB form of this color as `#RRGGBBAA`.
    pub fn to_hex_string(&self) -> Result<String> {
        Ok(self.to_rgba()?.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::ColorError};

    #[test]
    fn basic_rgb_colors() {
        let rgba = Rgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(rgba.red, 0.1);
        assert_eq!(rgba.green, 0.2);
        assert_eq!(rgba.blue, 0.3);
        assert_eq!(rgba.alpha, 0.4);
        assert_eq!(rgba.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Rgba::from([0.1, 0.2, 0.3, 0.4]), rgba);

        let srgba = Srgba::opaque(0.1, 0.2, 0.3);
        assert_eq!(srgba.alpha, 1.0);
    }

    #[test]
    fn from_slice_accepts_three_or_four() {
        assert_eq!(
            Rgba::from_slice(&[0.1, 0.2, 0.3]).unwrap(),
            Rgba::new(0.1, 0.2, 0.3, 1.0)
        );
        assert_eq!(
            Srgba::from_slice(&[0.1, 0.2, 0.3, 0.5]).unwrap(),
            Srgba::new(0.1, 0.2, 0.3, 0.5)
        );
        assert_eq!(
            Rgba::from_slice(&[0.1, 0.2]),
            Err(ColorError::Arity {
                operation: "rgba::from_slice",
                expected: 3..=4,
                actual: 2,
            })
        );
        assert!(matches!(
            Srgba::from_slice(&[0.0; 5]),
            Err(ColorError::Arity {
                operation: "srgba::from_slice",
                actual: 5,
                ..
            })
        ));
    }

    #[test]
    fn transfer_function_breakpoints() {
        assert_eq!(gamma::encode(0.0, SRGB_ENCODE_CUTOFF), 0.0);
        assert_component_eq!(gamma::encode(1.0, SRGB_ENCODE_CUTOFF), 1.0);
        assert_component_eq!(gamma::encode(0.002, SRGB_ENCODE_CUTOFF), 12.92 * 0.002);
        assert_eq!(gamma::decode(0.0), 0.0);
        assert_component_eq!(gamma::decode(1.0), 1.0);
        assert_component_eq!(gamma::decode(0.04), 0.04 / 12.92);
    }

    #[cfg(feature = "f64")]
    #[test]
    fn transfer_functions_are_inverses() {
        for value in [0.001, 0.01, 0.1, 0.2140, 0.5, 0.75, 0.99] {
            let encoded = gamma::encode(value, SRGB_ENCODE_CUTOFF);
            approx::assert_abs_diff_eq!(gamma::decode(encoded), value, epsilon = 1e-9);

            let decoded = gamma::decode(value);
            approx::assert_abs_diff_eq!(
                gamma::encode(decoded, SRGB_ENCODE_CUTOFF),
                value,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn chocolate_in_srgb() {
        let linear = Rgba::opaque(0.644480, 0.141263, 0.012983);
        let srgba = linear.to_gamma_encoded();
        assert_component_eq!(srgba.red, 0.823529);
        assert_component_eq!(srgba.green, 0.411765);
        assert_component_eq!(srgba.blue, 0.117647);

        let back = srgba.to_linear_light();
        assert_component_eq!(back.red, linear.red);
        assert_component_eq!(back.green, linear.green);
        assert_component_eq!(back.blue, linear.blue);
    }

    #[test]
    fn legacy_cutoff_only_changes_the_narrow_band() {
        let inside = Rgba::opaque(0.002, 0.5, 0.0001);
        let standard = inside.to_gamma_encoded();
        let legacy = inside.to_gamma_encoded_with(Quirks::LEGACY_SRGB_CUTOFF);

        assert_component_eq!(standard.red, 12.92 * 0.002);
        assert_component_eq!(legacy.red, 1.055 * (0.002 as Component).powf(1.0 / 2.4) - 0.055);
        assert_eq!(standard.green, legacy.green);
        assert_eq!(standard.blue, legacy.blue);
    }

    #[test]
    fn from_srgba_validates_encoded_values() {
        assert_eq!(
            Color::from_srgba(0.0, 0.0, -0.5, 1.0),
            Err(ColorError::Range {
                operation: "Color::from_srgba",
                component: "blue",
                value: -0.5,
            })
        );
    }

    #[test]
    fn hex_strings() {
        assert_eq!(Color::RED.to_hex_string().unwrap(), "#FF0000FF");
        assert_eq!(Color::WHITE.to_hex_string().unwrap(), "#FFFFFFFF");
        assert_eq!(Color::CLEAR.to_hex_string().unwrap(), "#00000000");
        assert_eq!(Color::CYAN.to_hex_string().unwrap(), "#00FFFFFF");
        assert_eq!(Color::GRAY.to_hex_string().unwrap(), "#808080FF");

        let half = Color::new(0.0, 1.0, 0.5, 0.5).unwrap();
        assert_eq!(half.to_hex_string().unwrap(), "#FF000080");

        // Exact halves go to the even byte.
        let ties = Rgba::new(2.5 / 255.0, 3.5 / 255.0, 0.5 / 255.0, 1.0);
        assert_eq!(ties.to_hex_string(), "#020400FF");
    }
}
