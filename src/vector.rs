//! Vectors in 3D space.

use crate::angle::Radians;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Threshold norm below which a vector is treated as having no direction.
///
/// Normalization of a vector whose norm does not exceed this value yields
/// the zero vector instead of dividing by a vanishing length.
pub const MIN_NORM: f32 = 1e-6;

/// A 3-dimensional vector.
///
/// Components are stored contiguously with 4-byte alignment, so the type
/// occupies exactly 12 bytes and packs without padding into larger
/// structures. For the 16-byte slot layout used by [`Frame`](crate::Frame),
/// see [`Vector3P`].
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 3]", from = "[f32; 3]")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

/// A 3-dimensional vector padded to 16 bytes with a tag word.
///
/// This is the slot type of [`Frame`](crate::Frame): three components
/// followed by a 4-byte tag. The tag is opaque; it is stored and copied
/// but never read by any computation, and all derived values carry tag 0.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3P {
    x: f32,
    y: f32,
    z: f32,
    tag: u32,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the norm of the vector's projection onto the XY plane.
    #[inline]
    pub fn norm_xy(&self) -> f32 {
        self.norm_squared_xy().sqrt()
    }

    /// Computes the square of the norm of the vector's projection onto the
    /// XY plane.
    #[inline]
    pub fn norm_squared_xy(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Computes the normalized version of the vector.
    ///
    /// If the norm does not exceed [`MIN_NORM`], the result is the zero
    /// vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm > MIN_NORM {
            Self::new(self.x / norm, self.y / norm, self.z / norm)
        } else {
            Self::zeros()
        }
    }

    /// Normalizes the vector in place.
    ///
    /// If the norm does not exceed [`MIN_NORM`], the vector is set to zero.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another
    /// (right-handed).
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplies each component by the corresponding component in another
    /// vector. The `*` operator between two vectors is shorthand for this.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Linearly interpolates between this vector and another.
    ///
    /// The interpolation parameter is not clamped, so values outside
    /// `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Computes the heading of the vector: the angle of its XY-projection,
    /// zero along the world y-axis and increasing counterclockwise about
    /// the up axis (`atan2(-x, y)`).
    ///
    /// A vector with zero XY-projection has heading zero.
    #[inline]
    pub fn heading(&self) -> Radians {
        Radians((-self.x).atan2(self.y))
    }

    /// Computes the signed angle from this vector to another, with the sign
    /// determined by the given axis.
    ///
    /// Both vectors are normalized first, the dot product is clamped to
    /// `[-1, 1]` before the arccosine, and the angle is negated when the
    /// cross product of the two vectors points away from the axis. The
    /// result is in `[-π, π]` radians.
    pub fn signed_angle_to(&self, other: &Self, axis: &Self) -> Radians {
        let a = self.normalized();
        let b = other.normalized();
        let angle = a.dot(&b).clamp(-1.0, 1.0).acos();
        if a.cross(&b).dot(axis) < 0.0 {
            Radians(-angle)
        } else {
            Radians(angle)
        }
    }

    /// Converts the vector to a padded slot with tag 0.
    #[inline]
    pub const fn padded(&self) -> Vector3P {
        Vector3P::from_vector(*self)
    }
}

impl Vector3P {
    /// Creates a new padded vector with the given components and tag.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, tag: u32) -> Self {
        Self { x, y, z, tag }
    }

    /// Creates a padded vector with the given components and tag 0.
    #[inline]
    pub const fn from_vector(vector: Vector3) -> Self {
        Self::with_tag(vector, 0)
    }

    /// Creates a padded vector with the given components and tag.
    #[inline]
    pub const fn with_tag(vector: Vector3, tag: u32) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), tag)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The tag word.
    #[inline]
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Sets the tag word.
    #[inline]
    pub const fn set_tag(&mut self, tag: u32) {
        self.tag = tag;
    }

    /// The vector part, without the tag.
    #[inline]
    pub const fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Replaces the vector part, keeping the tag.
    #[inline]
    pub const fn set_vector(&mut self, vector: Vector3) {
        self.x = vector.x();
        self.y = vector.y();
        self.z = vector.z();
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl From<Vector3> for Vector3P {
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::from_vector(vector)
    }
}

impl From<Vector3P> for Vector3 {
    #[inline]
    fn from(padded: Vector3P) -> Self {
        padded.vector()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, Vector3, Vector3, |a, b| {
    a.component_mul(b)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b * a });

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, Vector3, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_approx_eq!(Vector3 { x, y, z });
