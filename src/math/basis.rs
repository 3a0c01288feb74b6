use crate::error::GeometryError;

use super::{Axis, MajorAxis, Matrix3, Sign, Vector3, TOLERANCE};

/// An orthonormal, right-handed frame of three unit axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    x_axis: Vector3,
    y_axis: Vector3,
    z_axis: Vector3,
}

impl Basis {
    /// The world frame.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            x_axis: Vector3::x(),
            y_axis: Vector3::y(),
            z_axis: Vector3::z(),
        }
    }

    /// Builds an axis-snapped basis from a primary direction and a hint for the second one.
    ///
    /// The primary direction keeps its line but is flipped to point into the
    /// positive half of its nearest world axis, then takes that axis' slot.
    /// The second axis is `primary × hint`, placed in a slot according to its own
    /// nearest world axis and flipped to be non-negative along that slot. The
    /// remaining axis is the cross product of the other two in cyclic order.
    ///
    /// Neither input needs to be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteEdge`] if either direction has a NaN or
    /// infinite component, [`GeometryError::DegenerateEdge`] if either is exactly
    /// zero, or [`GeometryError::CollinearEdges`] if the two are parallel.
    pub fn from_directions(primary: &Vector3, hint: &Vector3) -> Result<Self, GeometryError> {
        let primary = normalized(primary)?;
        let hint = normalized(hint)?;

        let cross = primary.cross(&hint);
        let cross_len = cross.norm();
        if cross_len < TOLERANCE {
            return Err(GeometryError::CollinearEdges);
        }
        let mut secondary = cross / cross_len;

        let primary_major = MajorAxis::of(&primary);
        let primary = match primary_major.sign {
            Sign::Positive => primary,
            Sign::Negative => -primary,
        };

        let (secondary_slot, derived_slot) =
            assign_slots(primary_major.axis, MajorAxis::of(&secondary).axis);
        if secondary[secondary_slot.index()] < 0.0 {
            secondary = -secondary;
        }

        let mut axes = [Vector3::zeros(); 3];
        axes[primary_major.axis.index()] = primary;
        axes[secondary_slot.index()] = secondary;
        let a = axes[derived_slot.next().index()];
        let b = axes[derived_slot.next().next().index()];
        axes[derived_slot.index()] = a.cross(&b);

        let [x_axis, y_axis, z_axis] = axes;
        Ok(Self {
            x_axis,
            y_axis,
            z_axis,
        })
    }

    /// Builds a basis from the columns of a rotation matrix.
    ///
    /// The matrix is assumed to be orthonormal with determinant `+1`.
    #[must_use]
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        Self {
            x_axis: m.column(0).into_owned(),
            y_axis: m.column(1).into_owned(),
            z_axis: m.column(2).into_owned(),
        }
    }

    /// Returns the X axis.
    #[must_use]
    pub fn x_axis(&self) -> &Vector3 {
        &self.x_axis
    }

    /// Returns the Y axis.
    #[must_use]
    pub fn y_axis(&self) -> &Vector3 {
        &self.y_axis
    }

    /// Returns the Z axis.
    #[must_use]
    pub fn z_axis(&self) -> &Vector3 {
        &self.z_axis
    }

    /// Returns the axis occupying `slot`.
    #[must_use]
    pub fn axis(&self, slot: Axis) -> &Vector3 {
        match slot {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
            Axis::Z => &self.z_axis,
        }
    }

    /// Rotation matrix whose columns are `(x_axis, y_axis, z_axis)`.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3 {
        Matrix3::from_columns(&[self.x_axis, self.y_axis, self.z_axis])
    }

    /// Checks unit length, pairwise orthogonality and `x × y = z` within `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let unit = [self.x_axis, self.y_axis, self.z_axis]
            .iter()
            .all(|a| (a.norm() - 1.0).abs() < tolerance);
        let orthogonal = self.x_axis.dot(&self.y_axis).abs() < tolerance
            && self.y_axis.dot(&self.z_axis).abs() < tolerance
            && self.z_axis.dot(&self.x_axis).abs() < tolerance;
        let right_handed = (self.x_axis.cross(&self.y_axis) - self.z_axis).norm() < tolerance;
        unit && orthogonal && right_handed
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::identity()
    }
}

/// Slot for the secondary axis and the slot left for the derived axis,
/// keyed by the nearest world axes of the primary and secondary directions.
///
/// When the secondary is nearest to the primary's own axis it falls back to
/// the later free slot for an X primary and the earlier one otherwise.
const fn assign_slots(primary: Axis, secondary: Axis) -> (Axis, Axis) {
    match (primary, secondary) {
        (Axis::X, Axis::Y) => (Axis::Y, Axis::Z),
        (Axis::X, Axis::X | Axis::Z) => (Axis::Z, Axis::Y),
        (Axis::Y, Axis::X) => (Axis::X, Axis::Z),
        (Axis::Y, Axis::Y | Axis::Z) => (Axis::Z, Axis::X),
        (Axis::Z, Axis::X) => (Axis::X, Axis::Y),
        (Axis::Z, Axis::Y | Axis::Z) => (Axis::Y, Axis::X),
    }
}

/// Normalizes `v`, scaling by its largest component first so the norm cannot overflow.
fn normalized(v: &Vector3) -> Result<Vector3, GeometryError> {
    if !v.iter().all(|c| c.is_finite()) {
        return Err(GeometryError::NonFiniteEdge);
    }
    let scale = v.amax();
    if scale <= 0.0 {
        return Err(GeometryError::DegenerateEdge);
    }
    let scaled = v / scale;
    Ok(scaled / scaled.norm())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn assert_axes(basis: &Basis, x: Vector3, y: Vector3, z: Vector3) {
        assert_relative_eq!(*basis.x_axis(), x, epsilon = 1e-9);
        assert_relative_eq!(*basis.y_axis(), y, epsilon = 1e-9);
        assert_relative_eq!(*basis.z_axis(), z, epsilon = 1e-9);
    }

    #[test]
    fn world_aligned_edges_give_identity() {
        let basis = Basis::from_directions(&v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn flipped_primary_gives_same_basis() {
        let hint = v(0.0, 1.0, 0.0);
        let a = Basis::from_directions(&v(1.0, 0.0, 0.0), &hint).unwrap();
        let b = Basis::from_directions(&v(-1.0, 0.0, 0.0), &hint).unwrap();
        assert_relative_eq!(a.to_matrix(), b.to_matrix(), epsilon = 1e-12);
    }

    #[test]
    fn flipped_hint_gives_same_basis() {
        let primary = v(0.3, 1.0, 0.1);
        let a = Basis::from_directions(&primary, &v(1.0, 0.2, 0.0)).unwrap();
        let b = Basis::from_directions(&primary, &v(-1.0, -0.2, 0.0)).unwrap();
        assert_relative_eq!(a.to_matrix(), b.to_matrix(), epsilon = 1e-12);
    }

    #[test]
    fn primary_x_secondary_y() {
        // primary × hint = (0, -1, 0), flipped to +Y
        let basis = Basis::from_directions(&v(1.0, 0.0, 0.0), &v(0.0, 0.0, 1.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn primary_y_secondary_x() {
        let basis = Basis::from_directions(&v(0.0, 1.0, 0.0), &v(0.0, 0.0, 1.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn primary_y_secondary_z() {
        let basis = Basis::from_directions(&v(0.0, -1.0, 0.0), &v(1.0, 0.0, 0.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn primary_z_secondary_x() {
        let basis = Basis::from_directions(&v(0.0, 0.0, 1.0), &v(0.0, 1.0, 0.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn primary_z_secondary_y() {
        let basis = Basis::from_directions(&v(0.0, 0.0, 1.0), &v(1.0, 0.0, 0.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn primary_keeps_its_line() {
        let primary = v(2.0, 1.0, 0.0);
        let basis = Basis::from_directions(&primary, &v(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(*basis.x_axis(), primary.normalize(), epsilon = 1e-12);
        assert!(basis.is_orthonormal(1e-9));
    }

    #[test]
    fn x_primary_with_x_secondary_takes_z_slot() {
        let primary = v(1.0, 0.8, 0.8);
        let hint = v(0.0, -1.0, 1.0);
        let secondary = primary.cross(&hint);
        assert_eq!(MajorAxis::of(&primary).axis, Axis::X);
        assert_eq!(MajorAxis::of(&secondary).axis, Axis::X);

        let basis = Basis::from_directions(&primary, &hint).unwrap();
        assert_relative_eq!(*basis.x_axis(), primary.normalize(), epsilon = 1e-12);
        assert_relative_eq!(*basis.z_axis(), -secondary.normalize(), epsilon = 1e-12);
        assert!(basis.is_orthonormal(1e-9));
    }

    #[test]
    fn z_primary_with_z_secondary_takes_y_slot() {
        let primary = v(0.8, 0.8, 1.0);
        let hint = v(-1.0, 1.0, 0.0);
        let secondary = primary.cross(&hint);
        assert_eq!(MajorAxis::of(&secondary).axis, Axis::Z);

        let basis = Basis::from_directions(&primary, &hint).unwrap();
        assert_relative_eq!(*basis.z_axis(), primary.normalize(), epsilon = 1e-12);
        assert_relative_eq!(*basis.y_axis(), -secondary.normalize(), epsilon = 1e-12);
        assert!(basis.is_orthonormal(1e-9));
    }

    #[test]
    fn y_primary_with_y_secondary_takes_z_slot() {
        let primary = v(0.8, 1.0, 0.8);
        let hint = v(2.28, 0.0, -2.28);
        let secondary = primary.cross(&hint);
        assert_eq!(MajorAxis::of(&primary).axis, Axis::Y);
        assert_eq!(MajorAxis::of(&secondary).axis, Axis::Y);

        let basis = Basis::from_directions(&primary, &hint).unwrap();
        assert_relative_eq!(*basis.y_axis(), primary.normalize(), epsilon = 1e-12);
        assert_relative_eq!(*basis.z_axis(), -secondary.normalize(), epsilon = 1e-12);
        assert!(basis.is_orthonormal(1e-9));
    }

    #[test]
    fn oblique_edges_are_orthonormal() {
        let cases = [
            (v(0.3, -0.8, 0.2), v(0.9, 0.1, -0.4)),
            (v(-0.1, 0.2, -1.0), v(0.5, 0.5, 0.5)),
            (v(1.0, 1.0, 1.0), v(1.0, -1.0, 0.0)),
            (v(-2.0, 0.5, 0.5), v(0.1, 0.1, 3.0)),
        ];
        for (primary, hint) in cases {
            let basis = Basis::from_directions(&primary, &hint).unwrap();
            assert!(basis.is_orthonormal(1e-9), "{primary:?} / {hint:?} -> {basis:?}");
        }
    }

    #[test]
    fn zero_primary_is_degenerate() {
        let result = Basis::from_directions(&Vector3::zeros(), &v(0.0, 1.0, 0.0));
        assert_eq!(result, Err(GeometryError::DegenerateEdge));
    }

    #[test]
    fn zero_hint_is_degenerate() {
        let result = Basis::from_directions(&v(0.0, 1.0, 0.0), &Vector3::zeros());
        assert_eq!(result, Err(GeometryError::DegenerateEdge));
    }

    #[test]
    fn nan_direction_is_rejected() {
        let result = Basis::from_directions(&v(f64::NAN, 1.0, 0.0), &v(0.0, 0.0, 1.0));
        assert_eq!(result, Err(GeometryError::NonFiniteEdge));
        let result = Basis::from_directions(&v(0.0, 0.0, 1.0), &v(1.0, f64::INFINITY, 0.0));
        assert_eq!(result, Err(GeometryError::NonFiniteEdge));
    }

    #[test]
    fn huge_direction_does_not_overflow() {
        let basis = Basis::from_directions(&v(1e200, 0.0, 0.0), &v(0.0, 1e300, 0.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
    }

    #[test]
    fn tiny_direction_is_not_degenerate() {
        let basis = Basis::from_directions(&v(5e-11, 0.0, 0.0), &v(0.0, 5e-11, 0.0)).unwrap();
        assert_axes(&basis, Vector3::x(), Vector3::y(), Vector3::z());
        let basis = Basis::from_directions(&v(0.0, 0.0, 1e-320), &v(3e-320, 0.0, 0.0)).unwrap();
        assert!(basis.is_orthonormal(1e-9));
    }

    #[test]
    fn parallel_directions_are_collinear() {
        let result = Basis::from_directions(&v(1.0, 0.0, 0.0), &v(2.0, 0.0, 0.0));
        assert_eq!(result, Err(GeometryError::CollinearEdges));
        let result = Basis::from_directions(&v(1.0, 2.0, 3.0), &v(-2.0, -4.0, -6.0));
        assert_eq!(result, Err(GeometryError::CollinearEdges));
    }

    #[test]
    fn slot_table_never_reuses_primary_slot() {
        for primary in Axis::ALL {
            for secondary in Axis::ALL {
                let (slot, derived) = assign_slots(primary, secondary);
                assert_ne!(slot, primary);
                assert_ne!(derived, primary);
                assert_ne!(slot, derived);
            }
        }
    }

    #[test]
    fn slot_table_matches_fallback_rules() {
        let expected = [
            ((Axis::X, Axis::X), (Axis::Z, Axis::Y)),
            ((Axis::X, Axis::Y), (Axis::Y, Axis::Z)),
            ((Axis::X, Axis::Z), (Axis::Z, Axis::Y)),
            ((Axis::Y, Axis::X), (Axis::X, Axis::Z)),
            ((Axis::Y, Axis::Y), (Axis::Z, Axis::X)),
            ((Axis::Y, Axis::Z), (Axis::Z, Axis::X)),
            ((Axis::Z, Axis::X), (Axis::X, Axis::Y)),
            ((Axis::Z, Axis::Y), (Axis::Y, Axis::X)),
            ((Axis::Z, Axis::Z), (Axis::Y, Axis::X)),
        ];
        for ((primary, secondary), slots) in expected {
            assert_eq!(assign_slots(primary, secondary), slots, "{primary:?}/{secondary:?}");
        }
    }
}
