//! Conversions between a [`Color`] and its other representations.
//!
//! Every conversion goes through HSL, the native form of a [`Color`]. Linear
//! RGB is the hub for everything that needs channel values: sRGB, the bicone
//! form, luminance and the hex string are all derived from it.
//!
//! ```rust
//! use hslcolor::{Color, Rgba};
//! let red = Color::from_rgba(1.0, 0.0, 0.0, 1.0).unwrap();
//! assert_eq!(red, Color::RED);
//! assert_eq!(red.to_rgba().unwrap(), Rgba::new(1.0, 0.0, 0.0, 1.0));
//! ```

use tracing::debug;

use crate::{
    color::{Color, Component, Space},
    math::Components,
    models::{Bicone, Hsba, Hsva, Model, Rgba, Srgba},
    quirks::Quirks,
    Result,
};

impl Color {
    /// Convert this color to linear RGB.
    pub fn to_rgba(&self) -> Result<Rgba> {
        let Components(red, green, blue) =
            util::hsl_to_rgb(self.hue, self.saturation, self.lightness)?;
        Ok(Rgba::new(red, green, blue, self.alpha))
    }

    /// Create a color from linear RGB channels, each in `[0, 1]`.
    pub fn from_rgba(
        red: Component,
        green: Component,
        blue: Component,
        alpha: Component,
    ) -> Result<Self> {
        Rgba::new(red, green, blue, alpha).to_color()
    }

    /// Replace this color with the given linear RGB color. On failure the
    /// color is left untouched.
    pub fn set_rgba(&mut self, rgba: Rgba) -> Result<()> {
        *self = rgba.to_color()?;
        Ok(())
    }

    /// Convert this color to gamma encoded sRGB.
    pub fn to_srgba(&self) -> Result<Srgba> {
        self.to_srgba_with(Quirks::empty())
    }

    /// Convert this color to gamma encoded sRGB, honoring
    /// [`Quirks::LEGACY_SRGB_CUTOFF`].
    pub fn to_srgba_with(&self, quirks: Quirks) -> Result<Srgba> {
        Ok(self.to_rgba()?.to_gamma_encoded_with(quirks))
    }

    /// Create a color from gamma encoded sRGB channels, each in `[0, 1]`.
    pub fn from_srgba(
        red: Component,
        green: Component,
        blue: Component,
        alpha: Component,
    ) -> Result<Self> {
        Srgba::new(red, green, blue, alpha).to_color()
    }

    /// Replace this color with the given sRGB color. On failure the color is
    /// left untouched.
    pub fn set_srgba(&mut self, srgba: Srgba) -> Result<()> {
        *self = srgba.to_color()?;
        Ok(())
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsva(&self) -> Hsva {
        Hsva::from(self)
    }

    /// Create a color from the HSV notation, each component in `[0, 1]`.
    pub fn from_hsva(
        hue: Component,
        saturation: Component,
        value: Component,
        alpha: Component,
    ) -> Result<Self> {
        Hsva::new(hue, saturation, value, alpha).to_color()
    }

    /// Replace this color with the given HSV color. On failure the color is
    /// left untouched.
    pub fn set_hsva(&mut self, hsva: Hsva) -> Result<()> {
        *self = hsva.to_color()?;
        Ok(())
    }

    /// Convert this color to the HSB notation, another name for HSV.
    pub fn to_hsba(&self) -> Hsba {
        self.to_hsva()
    }

    /// Create a color from the HSB notation, another name for HSV.
    pub fn from_hsba(
        hue: Component,
        saturation: Component,
        brightness: Component,
        alpha: Component,
    ) -> Result<Self> {
        Self::from_hsva(hue, saturation, brightness, alpha)
    }

    /// Replace this color with the given HSB color.
    pub fn set_hsba(&mut self, hsba: Hsba) -> Result<()> {
        self.set_hsva(hsba)
    }

    /// Convert this color to the bicone (hue, chroma, lightness) form.
    pub fn to_bicone(&self) -> Result<Bicone> {
        Bicone::from_color(self)
    }

    /// Create a color from the bicone form, each component in `[0, 1]`.
    pub fn from_bicone(
        hue: Component,
        chroma: Component,
        lightness: Component,
        alpha: Component,
    ) -> Result<Self> {
        Bicone::new(hue, chroma, lightness, alpha).to_color()
    }

    /// Replace this color with the given bicone color. On failure the color
    /// is left untouched.
    pub fn set_bicone(&mut self, bicone: Bicone) -> Result<()> {
        self.set_bicone_with(bicone, Quirks::empty())
    }

    /// Replace this color with the given bicone color, honoring
    /// [`Quirks::BICONE_POLE_EARLY_RETURN`].
    ///
    /// With the quirk, the white pole is tested on this color rather than on
    /// `bicone`, so a white receiver only ever has its saturation cleared.
    pub fn set_bicone_with(&mut self, bicone: Bicone, quirks: Quirks) -> Result<()> {
        let color = bicone.to_color()?;

        if quirks.contains(Quirks::BICONE_POLE_EARLY_RETURN)
            && (bicone.lightness == 0.0 || self.lightness == 1.0)
        {
            debug!(?bicone, "bicone at a pole, only clearing the saturation");
            self.saturation = 0.0;
            return Ok(());
        }

        *self = color;
        Ok(())
    }

    /// Convert this color into any [`Model`].
    pub fn to_model<M: Model>(&self) -> Result<M> {
        M::from_color(self)
    }

    /// Create a color from any [`Model`].
    pub fn from_model<M: Model>(model: &M) -> Result<Self> {
        model.to_color()
    }

    /// Convert this color to the given representation, returned as
    /// components in order with alpha last.
    pub fn to_space(&self, space: Space) -> Result<[Component; 4]> {
        use Space as S;

        Ok(match space {
            S::Hsl => self.to_array(),
            S::Rgb => self.to_rgba()?.to_array(),
            S::Srgb => self.to_srgba()?.to_array(),
            S::Hsv => self.to_hsva().to_array(),
            S::Bicone => self.to_bicone()?.to_array(),
        })
    }

    /// Create a color from components given in the representation `space`.
    ///
    /// HSL accepts anything [`Color::from_slice`] does. Every other
    /// representation takes 3 or 4 components, alpha defaulting to 1.0.
    pub fn from_space(space: Space, values: &[Component]) -> Result<Self> {
        use Space as S;

        match space {
            S::Hsl => Self::from_slice(values),
            S::Rgb => Rgba::from_slice(values)?.to_color(),
            S::Srgb => Srgba::from_slice(values)?.to_color(),
            S::Hsv => Hsva::from_slice(values)?.to_color(),
            S::Bicone => Bicone::from_slice(values)?.to_color(),
        }
    }
}

pub(crate) mod util {
    use crate::{
        color::Component,
        error::ColorError,
        math::{clamp_unit, in_unit_range, wrap_unit, Components},
        Result,
    };

    /// Index of the 60° sector of the color wheel that `hue` falls in. The
    /// first sector is closed, the others are half open: `[0, 60]`,
    /// `(60, 120]`, ..., `(300, 360]`.
    fn sector(hue: Component) -> Result<u8> {
        if !in_unit_range(hue) {
            return Err(ColorError::Domain(hue));
        }

        let degrees = hue * 360.0;
        Ok(if degrees <= 60.0 {
            0
        } else if degrees <= 120.0 {
            1
        } else if degrees <= 180.0 {
            2
        } else if degrees <= 240.0 {
            3
        } else if degrees <= 300.0 {
            4
        } else {
            5
        })
    }

    /// Convert from HSL notation to linear RGB.
    pub fn hsl_to_rgb(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> Result<Components> {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue * 360.0 / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue) = match sector(hue)? {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        // Clamping only absorbs rounding, valid input stays in range.
        Ok(Components(red + m, green + m, blue + m).map(clamp_unit))
    }

    /// Convert from linear RGB to HSL notation. Achromatic input gets hue 0
    /// and saturation 0.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let degrees = 60.0
            * if max == red {
                ((green - blue) / delta) % 6.0
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        let hue = wrap_unit(degrees / 360.0);
        let saturation = clamp_unit(delta / (1.0 - (2.0 * lightness - 1.0).abs()));

        Components(hue, saturation, lightness)
    }

}
