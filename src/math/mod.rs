pub mod basis;
pub mod major_axis;
pub mod rotation;

pub use basis::Basis;
pub use major_axis::{Axis, MajorAxis, Sign};
pub use rotation::{basis_from_quaternion, basis_to_quaternion};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type, used for rotation matrices.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Unit quaternion type.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
