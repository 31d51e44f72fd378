//! Opt-in legacy behaviors.
//!
//! The default conversions follow the textbook formulas. Each flag below
//! restores one historical behavior for callers that need to reproduce
//! results computed by older implementations of this color type.

use bitflags::bitflags;

use crate::color::Component;

bitflags! {
    /// Legacy behaviors accepted by the `_with` variants of conversions and
    /// interpolation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quirks: u8 {
        /// Encode sRGB with a linear segment cutoff of `0.00031308` instead
        /// of `0.0031308`.
        const LEGACY_SRGB_CUTOFF = 1 << 0;
        /// Mix hue vectors as `(a + b) * w` instead of `a * (1 - w) + b * w`.
        const SUMMED_HUE_WEIGHT = 1 << 1;
        /// Recover the mixed hue with `atan(y / x)` instead of `atan2`.
        const SINGLE_QUADRANT_HUE = 1 << 2;
        /// When setting from a bicone whose lightness is 0, or onto a
        /// receiver whose lightness is 1, only zero the receiver's
        /// saturation.
        const BICONE_POLE_EARLY_RETURN = 1 << 3;

        /// Every legacy behavior at once.
        const LEGACY = Self::LEGACY_SRGB_CUTOFF.bits()
            | Self::SUMMED_HUE_WEIGHT.bits()
            | Self::SINGLE_QUADRANT_HUE.bits()
            | Self::BICONE_POLE_EARLY_RETURN.bits();
    }
}

/// Linear segment cutoff of the sRGB encoder.
pub(crate) const SRGB_ENCODE_CUTOFF: Component = 0.0031308;

/// The mistyped cutoff selected by [`Quirks::LEGACY_SRGB_CUTOFF`].
pub(crate) const LEGACY_SRGB_ENCODE_CUTOFF: Component = 0.00031308;

impl Default for Quirks {
    fn default() -> Self {
        Quirks::empty()
    }
}

impl Quirks {
    /// The cutoff the sRGB encoder should use.
    pub(crate) fn srgb_encode_cutoff(&self) -> Component {
        if self.contains(Quirks::LEGACY_SRGB_CUTOFF) {
            LEGACY_SRGB_ENCODE_CUTOFF
        } else {
            SRGB_ENCODE_CUTOFF
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_contains_everything() {
        assert_eq!(Quirks::LEGACY, Quirks::all());
        assert!(Quirks::default().is_empty());
    }

    #[test]
    fn cutoff_follows_flag() {
        assert_eq!(Quirks::empty().srgb_encode_cutoff(), 0.0031308);
        assert_eq!(Quirks::LEGACY.srgb_encode_cutoff(), 0.00031308);
    }
}
