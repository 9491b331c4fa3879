//! Orthonormal frames: rigid transforms stored as explicit basis vectors.

use crate::vector::{Vector3, Vector3P};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

/// Tolerance used by [`Frame::debug_assert_orthonormal`].
const DEBUG_ORTHONORMALITY_TOLERANCE: f32 = 1e-4;

/// A rigid transform stored as an orthonormal basis and an origin.
///
/// The basis vectors `right`, `forward` and `up` are the images of the
/// world x-, y- and z-axes; `position` is the origin. Each slot is a
/// padded [`Vector3P`], so the whole struct is 64 bytes with slots at byte
/// offsets 0, 16, 32 and 48, in that order, for engine interop. Slot tags
/// are carried along untouched; every derived frame (products, inverses,
/// rotation constructors) writes tag 0.
///
/// Frames compose with `*`: `a * b` applies `b` first, then `a`.
///
/// All operations assume the basis is orthonormal and right-handed. This
/// is a documented precondition, not an enforced invariant: constructors
/// taking raw vectors do not validate, and [`inverted`](Self::inverted)
/// applied to a non-orthonormal frame yields an undefined numerical
/// result rather than an error. Use [`is_orthonormal`](Self::is_orthonormal)
/// or [`debug_assert_orthonormal`](Self::debug_assert_orthonormal) where
/// validation is wanted.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Frame {
    right: Vector3P,
    forward: Vector3P,
    up: Vector3P,
    position: Vector3P,
}

impl Frame {
    /// The identity frame: world axes, origin at zero.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_basis_unchecked(
            Vector3::unit_x(),
            Vector3::unit_y(),
            Vector3::unit_z(),
            Vector3::zeros(),
        )
    }

    /// Creates a frame from basis vectors and a position, with all slot
    /// tags set to 0.
    ///
    /// The basis is assumed to be orthonormal and right-handed; it is not
    /// validated.
    #[inline]
    pub const fn from_basis_unchecked(
        right: Vector3,
        forward: Vector3,
        up: Vector3,
        position: Vector3,
    ) -> Self {
        Self {
            right: right.padded(),
            forward: forward.padded(),
            up: up.padded(),
            position: position.padded(),
        }
    }

    /// Creates a frame from four padded slots, keeping their tags.
    ///
    /// The basis is assumed to be orthonormal and right-handed; it is not
    /// validated.
    #[inline]
    pub const fn from_parts(
        right: Vector3P,
        forward: Vector3P,
        up: Vector3P,
        position: Vector3P,
    ) -> Self {
        Self {
            right,
            forward,
            up,
            position,
        }
    }

    /// The image of the world x-axis.
    #[inline]
    pub const fn right(&self) -> Vector3 {
        self.right.vector()
    }

    /// The image of the world y-axis.
    #[inline]
    pub const fn forward(&self) -> Vector3 {
        self.forward.vector()
    }

    /// The image of the world z-axis.
    #[inline]
    pub const fn up(&self) -> Vector3 {
        self.up.vector()
    }

    /// The origin of the frame.
    #[inline]
    pub const fn position(&self) -> Vector3 {
        self.position.vector()
    }

    /// The right slot, including its tag.
    #[inline]
    pub const fn right_padded(&self) -> &Vector3P {
        &self.right
    }

    /// The forward slot, including its tag.
    #[inline]
    pub const fn forward_padded(&self) -> &Vector3P {
        &self.forward
    }

    /// The up slot, including its tag.
    #[inline]
    pub const fn up_padded(&self) -> &Vector3P {
        &self.up
    }

    /// The position slot, including its tag.
    #[inline]
    pub const fn position_padded(&self) -> &Vector3P {
        &self.position
    }

    /// Moves the origin to the given position, keeping the slot tag.
    #[inline]
    pub const fn set_position(&mut self, position: Vector3) {
        self.position.set_vector(position);
    }

    /// Applies the rotational part of the frame to the given vector.
    ///
    /// The result is the linear combination of the basis vectors weighted
    /// by the vector's components; the position is ignored. Use this for
    /// directions.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.right() * vector.x() + self.forward() * vector.y() + self.up() * vector.z()
    }

    /// Applies the full frame to the given point: the rotational part
    /// followed by the translation to the frame's origin.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.transform_vector(point) + self.position()
    }

    /// Computes the inverse of the frame.
    ///
    /// The basis is transposed and the position replaced by the negated
    /// original position expressed in the original basis. This is the true
    /// inverse only when the basis is orthonormal.
    pub fn inverted(&self) -> Self {
        let right = self.right();
        let forward = self.forward();
        let up = self.up();
        let position = self.position();
        Self::from_basis_unchecked(
            Vector3::new(right.x(), forward.x(), up.x()),
            Vector3::new(right.y(), forward.y(), up.y()),
            Vector3::new(right.z(), forward.z(), up.z()),
            Vector3::new(
                -right.dot(&position),
                -forward.dot(&position),
                -up.dot(&position),
            ),
        )
    }

    /// Whether the basis vectors have unit length, are mutually
    /// perpendicular and form a right-handed set, with every deviation
    /// checked against the given tolerance.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let right = self.right();
        let forward = self.forward();
        let up = self.up();
        (right.norm_squared() - 1.0).abs() <= tolerance
            && (forward.norm_squared() - 1.0).abs() <= tolerance
            && (up.norm_squared() - 1.0).abs() <= tolerance
            && right.dot(&forward).abs() <= tolerance
            && right.dot(&up).abs() <= tolerance
            && forward.dot(&up).abs() <= tolerance
            && (right.cross(&forward).dot(&up) - 1.0).abs() <= tolerance
    }

    /// Asserts that the basis is orthonormal and right-handed.
    ///
    /// Compiled out of release builds.
    #[inline]
    pub fn debug_assert_orthonormal(&self) {
        debug_assert!(
            self.is_orthonormal(DEBUG_ORTHONORMALITY_TOLERANCE),
            "frame basis is not orthonormal: {self:?}"
        );
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Frame, Frame, Frame, |a, b| {
    Frame::from_basis_unchecked(
        a.transform_vector(&b.right()),
        a.transform_vector(&b.forward()),
        a.transform_vector(&b.up()),
        a.transform_point(&b.position()),
    )
});

// Approximate comparison looks at the float projections only; slot tags
// are not compared.
impl AbsDiffEq for Frame {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.right().abs_diff_eq(&other.right(), epsilon)
            && self.forward().abs_diff_eq(&other.forward(), epsilon)
            && self.up().abs_diff_eq(&other.up(), epsilon)
            && self.position().abs_diff_eq(&other.position(), epsilon)
    }
}

impl RelativeEq for Frame {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.right().relative_eq(&other.right(), epsilon, max_relative)
            && self
                .forward()
                .relative_eq(&other.forward(), epsilon, max_relative)
            && self.up().relative_eq(&other.up(), epsilon, max_relative)
            && self
                .position()
                .relative_eq(&other.position(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Degrees;
    use crate::rotation::EulerAngles;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::mem;

    const EPSILON: f32 = 1e-6;

    /// A frame rotated a quarter turn counterclockwise about the up axis.
    fn quarter_turn_frame() -> Frame {
        Frame::from_basis_unchecked(
            Vector3::unit_y(),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::unit_z(),
            Vector3::zeros(),
        )
    }

    prop_compose! {
        fn rotation_frame_strategy()(
            pitch in -80.0_f32..80.0,
            yaw in -180.0_f32..180.0,
            roll in -180.0_f32..180.0,
        ) -> Frame {
            Frame::from_euler_angles(EulerAngles::new(
                Degrees(pitch),
                Degrees(yaw),
                Degrees(roll),
            ))
        }
    }

    prop_compose! {
        fn frame_strategy()(
            frame in rotation_frame_strategy(),
            x in -10.0_f32..10.0,
            y in -10.0_f32..10.0,
            z in -10.0_f32..10.0,
        ) -> Frame {
            let mut frame = frame;
            frame.set_position(Vector3::new(x, y, z));
            frame
        }
    }

    prop_compose! {
        fn point_strategy()(
            x in -10.0_f32..10.0,
            y in -10.0_f32..10.0,
            z in -10.0_f32..10.0,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn identity_frame_leaves_vectors_and_points_unchanged() {
        let identity = Frame::identity();
        let vector = Vector3::new(1.0, -2.0, 3.0);

        assert_abs_diff_eq!(identity.transform_vector(&vector), vector);
        assert_abs_diff_eq!(identity.transform_point(&vector), vector);
    }

    #[test]
    fn transforming_vector_combines_basis_vectors() {
        let mut frame = quarter_turn_frame();
        frame.set_position(Vector3::new(10.0, 20.0, 30.0));

        // The basis images of the world axes come back directly.
        assert_abs_diff_eq!(frame.transform_vector(&Vector3::unit_x()), frame.right());
        assert_abs_diff_eq!(
            frame.transform_vector(&Vector3::unit_y()),
            frame.forward()
        );
        assert_abs_diff_eq!(frame.transform_vector(&Vector3::unit_z()), frame.up());

        // Directions are unaffected by the position.
        assert_abs_diff_eq!(
            frame.transform_vector(&Vector3::new(1.0, 1.0, 0.0)),
            Vector3::new(-1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn transforming_point_adds_position() {
        let mut frame = quarter_turn_frame();
        frame.set_position(Vector3::new(10.0, 20.0, 30.0));

        assert_abs_diff_eq!(
            frame.transform_point(&Vector3::new(1.0, 0.0, 0.0)),
            Vector3::new(10.0, 21.0, 30.0)
        );
        assert_abs_diff_eq!(frame.transform_point(&Vector3::zeros()), frame.position());
    }

    #[test]
    fn composition_applies_second_operand_first() {
        let rotation = quarter_turn_frame();
        let mut translation = Frame::identity();
        translation.set_position(Vector3::new(1.0, 0.0, 0.0));

        // Translate first, then rotate: the offset gets rotated too.
        let rotate_after_translate = rotation * translation;
        assert_abs_diff_eq!(
            rotate_after_translate.transform_point(&Vector3::zeros()),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = EPSILON
        );

        // Rotate first, then translate: the offset stays along world x.
        let translate_after_rotate = translation * rotation;
        assert_abs_diff_eq!(
            translate_after_rotate.transform_point(&Vector3::zeros()),
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverting_identity_gives_identity() {
        assert_abs_diff_eq!(Frame::identity().inverted(), Frame::identity());
    }

    #[test]
    fn multiplying_frame_by_its_inverse_gives_identity() {
        let mut frame = quarter_turn_frame();
        frame.set_position(Vector3::new(-4.0, 2.5, 11.0));

        assert_abs_diff_eq!(frame * frame.inverted(), Frame::identity(), epsilon = 1e-4);
        assert_abs_diff_eq!(frame.inverted() * frame, Frame::identity(), epsilon = 1e-4);
    }

    #[test]
    fn orthonormality_check_accepts_rotations_and_rejects_distortions() {
        assert!(Frame::identity().is_orthonormal(1e-5));
        assert!(quarter_turn_frame().is_orthonormal(1e-5));

        // Scaled basis vector.
        let scaled = Frame::from_basis_unchecked(
            Vector3::unit_x() * 2.0,
            Vector3::unit_y(),
            Vector3::unit_z(),
            Vector3::zeros(),
        );
        assert!(!scaled.is_orthonormal(1e-3));

        // Sheared basis: right and forward are no longer perpendicular.
        let sheared = Frame::from_basis_unchecked(
            Vector3::unit_x(),
            Vector3::new(0.5, 1.0, 0.0).normalized(),
            Vector3::unit_z(),
            Vector3::zeros(),
        );
        assert!(!sheared.is_orthonormal(1e-3));

        // Left-handed basis: orthonormal vectors, flipped handedness.
        let left_handed = Frame::from_basis_unchecked(
            Vector3::unit_y(),
            Vector3::unit_x(),
            Vector3::unit_z(),
            Vector3::zeros(),
        );
        assert!(!left_handed.is_orthonormal(1e-3));

        // The position plays no part in the check.
        let mut translated = Frame::identity();
        translated.set_position(Vector3::new(100.0, -50.0, 25.0));
        assert!(translated.is_orthonormal(1e-5));
    }

    #[test]
    fn slot_tags_survive_from_parts_and_are_zeroed_by_derivations() {
        let tagged = Frame::from_parts(
            Vector3P::with_tag(Vector3::unit_x(), 1),
            Vector3P::with_tag(Vector3::unit_y(), 2),
            Vector3P::with_tag(Vector3::unit_z(), 3),
            Vector3P::with_tag(Vector3::zeros(), 4),
        );
        assert_eq!(tagged.right_padded().tag(), 1);
        assert_eq!(tagged.forward_padded().tag(), 2);
        assert_eq!(tagged.up_padded().tag(), 3);
        assert_eq!(tagged.position_padded().tag(), 4);

        // Derived frames carry tag 0 in every slot.
        let product = tagged * tagged;
        assert_eq!(product.right_padded().tag(), 0);
        assert_eq!(product.position_padded().tag(), 0);

        let inverse = tagged.inverted();
        assert_eq!(inverse.forward_padded().tag(), 0);
        assert_eq!(inverse.up_padded().tag(), 0);

        // Moving the origin keeps the slot tag.
        let mut tagged = tagged;
        tagged.set_position(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(tagged.position_padded().tag(), 4);
    }

    #[test]
    fn layout_matches_interop_contract() {
        assert_eq!(mem::size_of::<Frame>(), 64);
        assert_eq!(mem::align_of::<Frame>(), 4);

        assert_eq!(mem::offset_of!(Frame, right), 0);
        assert_eq!(mem::offset_of!(Frame, forward), 16);
        assert_eq!(mem::offset_of!(Frame, up), 32);
        assert_eq!(mem::offset_of!(Frame, position), 48);
    }

    proptest! {
        #[test]
        fn should_get_identity_when_multiplying_frame_by_its_inverse(
            frame in frame_strategy()
        ) {
            prop_assert!(abs_diff_eq!(
                frame * frame.inverted(),
                Frame::identity(),
                epsilon = 1e-4
            ));
        }

        #[test]
        fn should_return_original_point_after_inverse_transform(
            frame in frame_strategy(),
            point in point_strategy(),
        ) {
            let round_tripped = frame
                .inverted()
                .transform_point(&frame.transform_point(&point));
            prop_assert!(abs_diff_eq!(round_tripped, point, epsilon = 1e-3));
        }

        #[test]
        fn should_apply_second_operand_first_when_composing(
            a in frame_strategy(),
            b in frame_strategy(),
            point in point_strategy(),
        ) {
            let composed = (a * b).transform_point(&point);
            let sequential = a.transform_point(&b.transform_point(&point));
            prop_assert!(abs_diff_eq!(composed, sequential, epsilon = 1e-3));
        }

        #[test]
        fn should_associate_frame_composition(
            a in frame_strategy(),
            b in frame_strategy(),
            c in frame_strategy(),
        ) {
            prop_assert!(abs_diff_eq!(
                (a * b) * c,
                a * (b * c),
                epsilon = 1e-3
            ));
        }
    }
}
