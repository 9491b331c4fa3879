//! Rotation construction and extraction for frames.

use crate::angle::{Angle, Degrees, Radians};
use crate::frame::Frame;
use crate::vector::{MIN_NORM, Vector3};
use approx::{AbsDiffEq, RelativeEq};

/// The world up direction assumed by the camera constructors.
pub const WORLD_UP: Vector3 = Vector3::unit_z();

/// Euler angles in degrees: pitch about the right axis, yaw about the up
/// axis, roll about the forward axis.
///
/// The corresponding rotation is `Rz(yaw) · Rx(pitch) · Ry(roll)`, roll
/// applied first. See [`Frame::from_euler_angles`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the right axis, positive tilting forward upward.
    pub pitch: Degrees,
    /// Rotation about the up axis, positive counterclockwise seen from
    /// above.
    pub yaw: Degrees,
    /// Rotation about the forward axis.
    pub roll: Degrees,
}

impl EulerAngles {
    /// Creates a new set of Euler angles.
    #[inline]
    pub const fn new(pitch: Degrees, yaw: Degrees, roll: Degrees) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Creates a set of all-zero Euler angles.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(Degrees(0.0), Degrees(0.0), Degrees(0.0))
    }
}

impl Frame {
    /// Builds the rotation frame for the given Euler angles, with the
    /// position at zero.
    ///
    /// The rotation is `Rz(yaw) · Rx(pitch) · Ry(roll)`: roll about the
    /// world y-axis applied first, then pitch about the world x-axis, then
    /// yaw about the world z-axis, all right-handed. This is the
    /// convention [`euler_angles`](Self::euler_angles) inverts.
    pub fn from_euler_angles(angles: EulerAngles) -> Self {
        let (sp, cp) = angles.pitch.sin_cos();
        let (sy, cy) = angles.yaw.sin_cos();
        let (sr, cr) = angles.roll.sin_cos();
        Self::from_basis_unchecked(
            Vector3::new(cy * cr - sy * sp * sr, sy * cr + cy * sp * sr, -cp * sr),
            Vector3::new(-sy * cp, cy * cp, sp),
            Vector3::new(cy * sr + sy * sp * cr, sy * sr - cy * sp * cr, cp * cr),
            Vector3::zeros(),
        )
    }

    /// Extracts the Euler angles of the frame's basis.
    ///
    /// Pitch is the arcsine of the forward z-component, yaw the planar
    /// bearing of forward and roll the rotation of right and up about
    /// forward. A frame built by [`from_euler_angles`](Self::from_euler_angles)
    /// with pitch inside (-90°, 90°) round-trips; outside that range the
    /// extracted angles describe the same rotation with pitch folded back
    /// into it.
    ///
    /// When forward is within [`MIN_NORM`] of vertical the yaw is
    /// degenerate and falls back to zero, and the extracted roll is not
    /// meaningful (gimbal lock).
    pub fn euler_angles(&self) -> EulerAngles {
        let forward = self.forward();

        // Round-off can push |z| just past 1 for a basis built from trig
        // products.
        let pitch = forward.z().clamp(-1.0, 1.0).asin();

        let planar_norm = forward.norm_xy();
        let yaw = if planar_norm > MIN_NORM {
            -(forward.x() / planar_norm).atan2(forward.y() / planar_norm)
        } else {
            0.0
        };

        let roll = (-self.right().z()).atan2(self.up().z());

        EulerAngles::new(
            Radians(pitch).as_degrees(),
            Radians(yaw).as_degrees(),
            Radians(roll).as_degrees(),
        )
    }

    /// Builds the rotation frame for a rotation of the given angle about
    /// the given axis, with the position at zero.
    ///
    /// The axis is normalized internally. If its norm does not exceed
    /// [`MIN_NORM`] the normalization is skipped and the axis used as
    /// given; with a zero axis this produces the cosine-scaled diagonal,
    /// a degenerate non-orthonormal frame.
    pub fn from_axis_angle(axis: &Vector3, angle: Degrees) -> Self {
        let norm = axis.norm();
        let axis = if norm > MIN_NORM {
            Vector3::new(axis.x() / norm, axis.y() / norm, axis.z() / norm)
        } else {
            *axis
        };

        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());

        Self::from_basis_unchecked(
            Vector3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
            Vector3::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
            Vector3::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
            Vector3::zeros(),
        )
    }

    /// Builds the orientation of a roll-free camera from compass-style yaw
    /// and pitch, with the position at zero.
    ///
    /// Forward points along `(sin yaw · cos pitch, cos yaw · cos pitch,
    /// sin pitch)`, right is the normalized cross product of forward with
    /// [`WORLD_UP`] and up completes the right-handed basis. When forward
    /// is within [`MIN_NORM`] of vertical the cross product degenerates
    /// and right falls back to the horizontal direction
    /// `(cos yaw, -sin yaw, 0)`, which keeps the requested yaw.
    ///
    /// The yaw here turns in the opposite sense to
    /// [`euler_angles`](Self::euler_angles): the heading of the resulting
    /// forward vector is `-yaw`.
    pub fn from_camera_angles(yaw: Degrees, pitch: Degrees) -> Self {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();

        let forward = Vector3::new(sy * cp, cy * cp, sp);

        let horizontal = forward.cross(&WORLD_UP);
        let right = if horizontal.norm() > MIN_NORM {
            horizontal.normalized()
        } else {
            Vector3::new(cy, -sy, 0.0)
        };

        let up = right.cross(&forward).normalized();

        Self::from_basis_unchecked(right, forward, up, Vector3::zeros())
    }
}

impl AbsDiffEq for EulerAngles {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.pitch.abs_diff_eq(&other.pitch, epsilon)
            && self.yaw.abs_diff_eq(&other.yaw, epsilon)
            && self.roll.abs_diff_eq(&other.roll, epsilon)
    }
}

impl RelativeEq for EulerAngles {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.pitch.relative_eq(&other.pitch, epsilon, max_relative)
            && self.yaw.relative_eq(&other.yaw, epsilon, max_relative)
            && self.roll.relative_eq(&other.roll, epsilon, max_relative)
    }
}
