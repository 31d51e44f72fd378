//! A [`Color`] holds hue, saturation, lightness and alpha, each in `[0, 1]`.

use std::fmt;

use euclid::Angle;
use rand::Rng;
use tracing::trace;

use crate::{
    convert::util,
    error::ColorError,
    math::{check_unit, clamp_unit, wrap_unit, Components},
    Result,
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

const TAU: Component = std::f64::consts::TAU as Component;

/// Names the four components of a [`Color`], in index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Index 0.
    Hue = 0,
    /// Index 1.
    Saturation = 1,
    /// Index 2.
    Lightness = 2,
    /// Index 3.
    Alpha = 3,
}

impl Channel {
    /// All channels in index order.
    pub const ALL: [Channel; 4] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Lightness,
        Channel::Alpha,
    ];

    /// Lowercase name of the channel.
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
            Channel::Alpha => "alpha",
        }
    }
}

impl TryFrom<usize> for Channel {
    type Error = ColorError;

    fn try_from(index: usize) -> Result<Self> {
        Channel::ALL
            .get(index)
            .copied()
            .ok_or(ColorError::Index(index))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The representations a [`Color`] converts to and from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Hue, saturation, lightness. The native representation.
    Hsl = 0,
    /// Linear red, green, blue.
    Rgb = 1,
    /// Gamma encoded red, green, blue.
    Srgb = 2,
    /// Hue, saturation, value (also known as HSB).
    Hsv = 3,
    /// Hue, chroma, lightness.
    Bicone = 4,
}

impl Space {
    /// Every representation, HSL first.
    pub const ALL: [Space; 5] = [
        Space::Hsl,
        Space::Rgb,
        Space::Srgb,
        Space::Hsv,
        Space::Bicone,
    ];
}

/// A color in the HSL notation with an alpha component.
///
/// All four components lie in `[0, 1]` at all times. Hue is an angle on the
/// color wheel scaled to `[0, 1]`, so 0 and 1 denote the same hue.
///
/// Constructors validate their input and fail with [`ColorError::Range`].
/// Setters never fail: saturation, lightness and alpha are clamped, hue is
/// wrapped around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub(crate) hue: Component,
    pub(crate) saturation: Component,
    pub(crate) lightness: Component,
    pub(crate) alpha: Component,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_parts(0.0, 0.0, 0.0, 1.0);
    /// Opaque 50% gray.
    pub const GRAY: Color = Color::from_parts(0.0, 0.0, 0.5, 1.0);
    /// Alias for [`Color::GRAY`].
    pub const GREY: Color = Color::GRAY;
    /// Opaque white.
    pub const WHITE: Color = Color::from_parts(0.0, 0.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Color = Color::from_parts(0.0, 0.0, 0.0, 0.0);
    /// Opaque red.
    pub const RED: Color = Color::from_parts(0.0, 1.0, 0.5, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::from_parts(120.0 / 360.0, 1.0, 0.5, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::from_parts(240.0 / 360.0, 1.0, 0.5, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::from_parts(60.0 / 360.0, 1.0, 0.5, 1.0);
    /// Opaque cyan.
    pub const CYAN: Color = Color::from_parts(180.0 / 360.0, 1.0, 0.5, 1.0);
    /// Opaque magenta.
    pub const MAGENTA: Color = Color::from_parts(300.0 / 360.0, 1.0, 0.5, 1.0);

    /// Components used for anything missing from [`Color::from_slice`].
    pub const DEFAULT_COMPONENTS: [Component; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Assemble a color from components already known to be valid.
    pub(crate) const fn from_parts(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Create a new [`Color`] from its four components.
    /// ```rust
    /// use hslcolor::Color;
    /// let orange = Color::new(30.0 / 360.0, 1.0, 0.5, 1.0).unwrap();
    /// assert!(Color::new(1.5, 1.0, 0.5, 1.0).is_err());
    /// ```
    /// Any component outside of `[0, 1]` is rejected; the hue is not wrapped.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Result<Self> {
        const OPERATION: &str = "Color::new";

        Ok(Self::from_parts(
            check_unit(OPERATION, Channel::Hue.name(), hue)?,
            check_unit(OPERATION, Channel::Saturation.name(), saturation)?,
            check_unit(OPERATION, Channel::Lightness.name(), lightness)?,
            check_unit(OPERATION, Channel::Alpha.name(), alpha)?,
        ))
    }

    /// Create a new [`Color`] from up to four components in the order hue,
    /// saturation, lightness, alpha. Missing trailing components take their
    /// value from [`Color::DEFAULT_COMPONENTS`].
    pub fn from_slice(values: &[Component]) -> Result<Self> {
        if values.len() > 4 {
            return Err(ColorError::Arity {
                operation: "Color::from_slice",
                expected: 0..=4,
                actual: values.len(),
            });
        }

        let mut components = Self::DEFAULT_COMPONENTS;
        components[..values.len()].copy_from_slice(values);

        let [hue, saturation, lightness, alpha] = components;
        Self::new(hue, saturation, lightness, alpha)
    }

    /// Return the components in the order hue, saturation, lightness, alpha.
    pub const fn to_array(&self) -> [Component; 4] {
        [self.hue, self.saturation, self.lightness, self.alpha]
    }

    /// The hue, scaled to `[0, 1]`.
    pub const fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation.
    pub const fn saturation(&self) -> Component {
        self.saturation
    }

    /// The lightness.
    pub const fn lightness(&self) -> Component {
        self.lightness
    }

    /// The alpha component.
    pub const fn alpha(&self) -> Component {
        self.alpha
    }

    /// Set the hue, wrapping it around the color wheel onto `[0, 1)`.
    pub fn set_hue(&mut self, hue: Component) {
        self.hue = wrap_unit(hue);
    }

    /// Set the saturation, clamped to `[0, 1]`.
    pub fn set_saturation(&mut self, saturation: Component) {
        self.saturation = clamp_unit(saturation);
    }

    /// Set the lightness, clamped to `[0, 1]`.
    pub fn set_lightness(&mut self, lightness: Component) {
        self.lightness = clamp_unit(lightness);
    }

    /// Set the alpha component, clamped to `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: Component) {
        self.alpha = clamp_unit(alpha);
    }

    /// The hue as an angle in degrees.
    pub fn hue_degrees(&self) -> Component {
        self.hue * 360.0
    }

    /// The hue as an angle in radians.
    pub fn hue_radians(&self) -> Component {
        self.hue * TAU
    }

    /// The hue as an [`Angle`].
    pub fn hue_angle(&self) -> Angle<Component> {
        Angle::radians(self.hue_radians())
    }

    /// Set the hue from an angle in degrees. Any finite angle is accepted,
    /// including negative angles and angles past a full turn.
    pub fn set_hue_degrees(&mut self, degrees: Component) {
        self.hue = wrap_unit(degrees / 360.0);
    }

    /// Set the hue from an angle in radians. Any finite angle is accepted,
    /// including negative angles and angles past a full turn.
    pub fn set_hue_radians(&mut self, radians: Component) {
        self.hue = wrap_unit(radians / TAU);
    }

    /// Set the hue from an [`Angle`].
    pub fn set_hue_angle(&mut self, angle: Angle<Component>) {
        self.set_hue_radians(angle.radians);
    }

    /// Return the component at `index`: 0 is hue, 1 saturation, 2 lightness
    /// and 3 alpha.
    pub fn get(&self, index: usize) -> Result<Component> {
        let channel = Channel::try_from(index)?;
        Ok(self.channel(channel))
    }

    /// Set the component at `index` through its setter, so the value is
    /// wrapped (hue) or clamped (everything else).
    pub fn set(&mut self, index: usize, value: Component) -> Result<()> {
        let channel = Channel::try_from(index)?;
        self.set_channel(channel, value);
        Ok(())
    }

    /// Return the value of a single channel.
    pub const fn channel(&self, channel: Channel) -> Component {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
            Channel::Alpha => self.alpha,
        }
    }

    /// Set a single channel through its setter.
    pub fn set_channel(&mut self, channel: Channel, value: Component) {
        match channel {
            Channel::Hue => self.set_hue(value),
            Channel::Saturation => self.set_saturation(value),
            Channel::Lightness => self.set_lightness(value),
            Channel::Alpha => self.set_alpha(value),
        }
    }

    /// Return the inverse of this color. Alpha is unchanged.
    pub fn inverted(&self) -> Self {
        Self::from_parts(
            wrap_unit(1.0 - self.hue),
            1.0 - self.saturation,
            1.0 - self.lightness,
            self.alpha,
        )
    }

    /// Draw a random opaque color using the thread local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Draw a random opaque color from `rng`.
    ///
    /// Red, green and blue are drawn uniformly and converted to HSL.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rgb = Components(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        );
        trace!(red = rgb.0, green = rgb.1, blue = rgb.2, "random color");

        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&rgb);
        Self::from_parts(hue, saturation, lightness, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        let [hue, saturation, lightness, alpha] = Self::DEFAULT_COMPONENTS;
        Self::from_parts(hue, saturation, lightness, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} ; {} ; {} ; {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
