//! Unit quaternions for frame orientation interchange.

use crate::frame::Frame;
use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};

/// A rotation quaternion with scalar-last layout.
///
/// The vector part is `(x, y, z)` and the scalar part `w`, so the identity
/// rotation is `(0, 0, 0, 1)`. [`from_frame`](Self::from_frame) produces
/// unit quaternions from orthonormal bases; [`to_frame`](Self::to_frame)
/// expects a unit quaternion.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// Creates a new quaternion with the given vector and scalar parts.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates the identity quaternion.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the x-component of the vector part.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y-component of the vector part.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the z-component of the vector part.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Returns the scalar part.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// Computes the squared norm of the quaternion.
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Computes the norm of the quaternion.
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Returns the quaternion scaled to unit norm.
    ///
    /// Intended for renormalizing quaternions that have drifted slightly
    /// off unit length. A zero quaternion yields non-finite components.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::new(
            self.x / norm,
            self.y / norm,
            self.z / norm,
            self.w / norm,
        )
    }

    /// Extracts the rotation of the given frame's basis as a unit
    /// quaternion. The frame's position is ignored.
    ///
    /// The computation branches on the largest of the basis trace and the
    /// three diagonal elements, keeping the square root argument away from
    /// zero. The comparisons are strict, so exact ties fall through to the
    /// later branch. The basis must be orthonormal for the result to be a
    /// unit quaternion.
    pub fn from_frame(frame: &Frame) -> Self {
        let right = frame.right();
        let forward = frame.forward();
        let up = frame.up();

        let trace = right.x() + forward.y() + up.z();

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            Self::new(
                (forward.z() - up.y()) / s,
                (up.x() - right.z()) / s,
                (right.y() - forward.x()) / s,
                0.25 * s,
            )
        } else if right.x() > forward.y() && right.x() > up.z() {
            let s = 2.0 * (1.0 + right.x() - forward.y() - up.z()).sqrt();
            Self::new(
                0.25 * s,
                (forward.x() + right.y()) / s,
                (up.x() + right.z()) / s,
                (forward.z() - up.y()) / s,
            )
        } else if forward.y() > up.z() {
            let s = 2.0 * (1.0 + forward.y() - right.x() - up.z()).sqrt();
            Self::new(
                (forward.x() + right.y()) / s,
                0.25 * s,
                (up.y() + forward.z()) / s,
                (up.x() - right.z()) / s,
            )
        } else {
            let s = 2.0 * (1.0 + up.z() - right.x() - forward.y()).sqrt();
            Self::new(
                (up.x() + right.z()) / s,
                (forward.z() + up.y()) / s,
                0.25 * s,
                (right.y() - forward.x()) / s,
            )
        }
    }

    /// Builds the rotation frame described by the quaternion, with the
    /// position at zero.
    ///
    /// The quaternion must have unit norm for the basis to be orthonormal.
    pub fn to_frame(&self) -> Frame {
        let Self { x, y, z, w } = *self;

        Frame::from_basis_unchecked(
            Vector3::new(
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y + w * z),
                2.0 * (x * z - w * y),
            ),
            Vector3::new(
                2.0 * (x * y - w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z + w * x),
            ),
            Vector3::new(
                2.0 * (x * z + w * y),
                2.0 * (y * z - w * x),
                1.0 - 2.0 * (x * x + y * y),
            ),
            Vector3::zeros(),
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl_approx_eq!(Quaternion { x, y, z, w });
