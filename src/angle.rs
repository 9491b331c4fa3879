//! Angle units and conversions.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    f32::consts::{FRAC_1_PI, PI},
    ops::{Add, Div, Mul, Sub},
};

/// Represents an angle.
///
/// All trigonometry goes through [`radians`](Self::radians), so degree
/// values only ever reach `sin`/`cos` after conversion.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32;

    /// Computes the sine of the angle.
    fn sin(self) -> f32 {
        self.radians().sin()
    }

    /// Computes the cosine of the angle.
    fn cos(self) -> f32 {
        self.radians().cos()
    }

    /// Computes the sine and cosine of the angle.
    fn sin_cos(self) -> (f32, f32) {
        self.radians().sin_cos()
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f32 {
        self.0
    }

    fn radians(self) -> f32 {
        Radians::from(self).0
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f32 {
        Degrees::from(self).0
    }

    fn radians(self) -> f32 {
        self.0
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(radians_to_degrees(rad.0))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(degrees_to_radians(deg.0))
    }
}

// Arithmetic, comparison and approximate equality for one angle unit.
// Mixed-unit right-hand sides are converted to the left-hand side's unit.
macro_rules! impl_angle_unit_ops {
    ($unit:ty, $counterpart:ty) => {
        impl Add for $unit {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $unit {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Add<$counterpart> for $unit {
            type Output = Self;
            fn add(self, rhs: $counterpart) -> Self {
                self + Self::from(rhs)
            }
        }

        impl Sub<$counterpart> for $unit {
            type Output = Self;
            fn sub(self, rhs: $counterpart) -> Self {
                self - Self::from(rhs)
            }
        }

        impl Mul<f32> for $unit {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl PartialEq<$counterpart> for $unit {
            fn eq(&self, rhs: &$counterpart) -> bool {
                self.0 == Self::from(*rhs).0
            }
        }

        impl PartialOrd<$counterpart> for $unit {
            fn partial_cmp(&self, rhs: &$counterpart) -> Option<Ordering> {
                self.0.partial_cmp(&Self::from(*rhs).0)
            }
        }

        impl AbsDiffEq for $unit {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                f32::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl AbsDiffEq<$counterpart> for $unit {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &$counterpart, epsilon: f32) -> bool {
                f32::abs_diff_eq(&self.0, &Self::from(*other).0, epsilon)
            }
        }

        impl RelativeEq for $unit {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                f32::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }

        impl RelativeEq<$counterpart> for $unit {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &$counterpart,
                epsilon: f32,
                max_relative: f32,
            ) -> bool {
                f32::relative_eq(&self.0, &Self::from(*other).0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_unit_ops!(Degrees, Radians);
impl_angle_unit_ops!(Radians, Degrees);

/// Converts the given angle in radians to degrees.
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 * FRAC_1_PI)
}

/// Converts the given angle in degrees to radians.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn conversions_for_special_angles_work() {
        for (deg, rad) in [
            (0.0, 0.0),
            (45.0, PI / 4.0),
            (90.0, PI / 2.0),
            (180.0, PI),
            (360.0, 2.0 * PI),
            (-90.0, -PI / 2.0),
            (-270.0, -3.0 * PI / 2.0),
        ] {
            assert_abs_diff_eq!(Degrees(deg).radians(), rad, epsilon = 1e-6);
            assert_abs_diff_eq!(Radians(rad).degrees(), deg, epsilon = 1e-4);
        }
    }

    #[test]
    fn conversions_invert_each_other() {
        assert_abs_diff_eq!(
            radians_to_degrees(degrees_to_radians(37.5)),
            37.5,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            degrees_to_radians(radians_to_degrees(-1.2)),
            -1.2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn angle_ops_work() {
        assert_abs_diff_eq!(Degrees(50.0) + Degrees(25.0), Degrees(75.0));
        assert_abs_diff_eq!(Degrees(50.0) - Degrees(25.0), Degrees(25.0));
        assert_abs_diff_eq!(Degrees(50.0) * 3.0, Degrees(150.0));
        assert_abs_diff_eq!(Degrees(50.0) / 2.0, Degrees(25.0));

        assert_abs_diff_eq!(Radians(0.75) + Radians(0.25), Radians(1.0));
        assert_abs_diff_eq!(Radians(0.75) - Radians(0.25), Radians(0.5));
        assert_abs_diff_eq!(Radians(0.75) * 4.0, Radians(3.0));
        assert_abs_diff_eq!(Radians(0.75) / 3.0, Radians(0.25));
    }

    #[test]
    fn mixed_degree_radian_ops_work() {
        assert_abs_diff_eq!(Degrees(30.0) + Radians(PI / 2.0), Degrees(120.0));
        assert_abs_diff_eq!(Radians(PI / 2.0) + Degrees(90.0), Radians(PI));
        assert_abs_diff_eq!(Degrees(30.0) - Radians(PI / 2.0), Degrees(-60.0));
        assert_abs_diff_eq!(Radians(PI / 2.0) - Degrees(90.0), Radians(0.0));

        assert_eq!(Degrees(0.0), Radians(0.0));
        assert!(Degrees(60.0) > Radians(0.0));
        assert!(Degrees(60.0) < Radians(PI));
    }

    #[test]
    fn trigonometry_uses_radian_value() {
        assert_abs_diff_eq!(Degrees(90.0).sin(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(180.0).cos(), -1.0, epsilon = 1e-6);

        let (sin, cos) = Degrees(30.0).sin_cos();
        assert_abs_diff_eq!(sin, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(cos, 3.0_f32.sqrt() / 2.0, epsilon = 1e-6);

        let (sin, cos) = Radians(PI / 4.0).sin_cos();
        assert_abs_diff_eq!(sin, cos, epsilon = 1e-6);
    }
}
