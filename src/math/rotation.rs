use nalgebra::Rotation3;

use super::{Basis, UnitQuaternion};

/// Converts a basis into the unit quaternion of the matrix with columns `(x, y, z)`.
///
/// The conversion picks its branch from the trace, falling back to the largest
/// diagonal element when the trace is not positive, so it stays stable for
/// rotations near 180°.
#[must_use]
pub fn basis_to_quaternion(basis: &Basis) -> UnitQuaternion {
    let rotation = Rotation3::from_matrix_unchecked(basis.to_matrix());
    UnitQuaternion::from_rotation_matrix(&rotation)
}

/// Recovers the basis whose axes are the columns of the quaternion's rotation matrix.
#[must_use]
pub fn basis_from_quaternion(rotation: &UnitQuaternion) -> Basis {
    Basis::from_rotation_matrix(rotation.to_rotation_matrix().matrix())
}
