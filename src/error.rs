//! Errors returned by color construction, conversion and arithmetic.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::color::{Channel, Component};

/// Everything that can go wrong when working with a [`Color`](crate::Color).
///
/// Errors are returned at the point of the offending call and nothing is
/// retried. A failing constructor or setter never leaves a half updated
/// color behind.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorError {
    /// A component was outside of `[0, 1]` where eager validation applies.
    #[error("{operation}: {component} must be within [0, 1], got {value}")]
    Range {
        /// The operation that rejected the value.
        operation: &'static str,
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: Component,
    },

    /// A slice of components had the wrong length.
    #[error(
        "{operation}: expected {} to {} components, got {actual}",
        .expected.start(),
        .expected.end()
    )]
    Arity {
        /// The operation that rejected the slice.
        operation: &'static str,
        /// The accepted number of components.
        expected: RangeInclusive<usize>,
        /// The number of components that were passed.
        actual: usize,
    },

    /// The divisor of a component-wise division had a zero component.
    #[error("division by zero: {0} component of the divisor is zero")]
    DivisionByZero(Channel),

    /// A component index outside of `0..=3`.
    #[error("component index {0} is out of range 0..=3")]
    Index(usize),

    /// The hue left `[0, 1]` while selecting an RGB sector.
    #[error("hue {0} is outside of [0, 1]")]
    Domain(Component),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ColorError::Range {
            operation: "Color::new",
            component: "hue",
            value: -0.5,
        };
        assert_eq!(err.to_string(), "Color::new: hue must be within [0, 1], got -0.5");

        let err = ColorError::Arity {
            operation: "rgba::from_slice",
            expected: 3..=4,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "rgba::from_slice: expected 3 to 4 components, got 5"
        );

        let err = ColorError::DivisionByZero(Channel::Lightness);
        assert_eq!(
            err.to_string(),
            "division by zero: lightness component of the divisor is zero"
        );

        assert_eq!(
            ColorError::Index(7).to_string(),
            "component index 7 is out of range 0..=3"
        );
    }
}
