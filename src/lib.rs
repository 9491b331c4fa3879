//! Rigid transform math for right-handed, z-up coordinate frames.

#[macro_use]
mod macros;

pub mod angle;
pub mod frame;
pub mod quaternion;
pub mod rotation;
pub mod vector;

pub use angle::{Angle, Degrees, Radians, degrees_to_radians, radians_to_degrees};
pub use frame::Frame;
pub use quaternion::Quaternion;
pub use rotation::{EulerAngles, WORLD_UP};
pub use vector::{MIN_NORM, Vector3, Vector3P};
