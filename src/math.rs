//! Math utility functions.

use num_traits::Float;

use crate::{color::Component, error::ColorError, Result};

/// Three channels of an RGB triplet, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

/// Weighted blend of `a` and `b`, exact at both ends of `t`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Whether `value` lies in the closed unit interval. NaN never does.
pub fn in_unit_range(value: Component) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Reject `value` unless it lies in the closed unit interval.
pub fn check_unit(
    operation: &'static str,
    component: &'static str,
    value: Component,
) -> Result<Component> {
    if in_unit_range(value) {
        Ok(value)
    } else {
        Err(ColorError::Range {
            operation,
            component,
            value,
        })
    }
}

/// Clamp into `[0, 1]`. NaN becomes 0.
pub fn clamp_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Wrap any real onto the half-open interval `[0, 1)`. Non-finite values
/// become 0.
pub fn wrap_unit(value: Component) -> Component {
    if !value.is_finite() {
        return 0.0;
    }

    let wrapped = value.rem_euclid(1.0);
    // rem_euclid rounds up to exactly 1.0 for tiny negative inputs and keeps
    // the sign of -0.0.
    if wrapped >= 1.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn lerp_is_exact_at_the_ends() {
        assert_eq!(lerp(0.3 as Component, 0.9, 0.0), 0.3);
        assert_eq!(lerp(0.3 as Component, 0.9, 1.0), 0.9);
        assert_component_eq!(lerp(0.2 as Component, 0.6, 0.5), 0.4);
    }

    #[test]
    fn unit_range_excludes_nan() {
        assert!(in_unit_range(0.0));
        assert!(in_unit_range(1.0));
        assert!(!in_unit_range(-0.0001));
        assert!(!in_unit_range(Component::NAN));
        assert!(check_unit("test", "x", 1.5).is_err());
    }

    #[test]
    fn clamp_and_wrap() {
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(Component::NAN), 0.0);

        assert_component_eq!(wrap_unit(1.25), 0.25);
        assert_component_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(-1e-20), 0.0);
        assert_eq!(wrap_unit(Component::INFINITY), 0.0);
        assert!(wrap_unit(-0.0).is_sign_positive());
        assert!(wrap_unit(-1.0).is_sign_positive());
    }
}
