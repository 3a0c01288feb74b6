use nalgebra::Unit;

use super::CursorPlacement;
use crate::math::{Point3, UnitQuaternion, Vector3, TOLERANCE};

/// Receives the result of an alignment.
///
/// Implementors are written exactly once per successful alignment and are
/// responsible for storing the rotation in whatever form they keep it.
pub trait PlacementSink {
    /// Applies `placement`. The location must only change when
    /// `placement.position` is present.
    fn apply(&mut self, placement: &CursorPlacement);
}

/// How a [`Cursor`] stores its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    #[default]
    Quaternion,
    AxisAngle,
    /// Extrinsic X, then Y, then Z.
    EulerXyz,
}

/// A rotation in the representation of a [`RotationMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationValue {
    Quaternion(UnitQuaternion),
    AxisAngle { axis: Vector3, angle: f64 },
    EulerXyz { x: f64, y: f64, z: f64 },
}

impl RotationValue {
    /// Expresses `rotation` in the representation of `mode`.
    ///
    /// The identity in axis-angle form uses `+Y` as its axis.
    #[must_use]
    pub fn from_quaternion(mode: RotationMode, rotation: &UnitQuaternion) -> Self {
        match mode {
            RotationMode::Quaternion => RotationValue::Quaternion(*rotation),
            RotationMode::AxisAngle => match rotation.axis_angle() {
                Some((axis, angle)) => RotationValue::AxisAngle {
                    axis: axis.into_inner(),
                    angle,
                },
                None => RotationValue::AxisAngle {
                    axis: Vector3::y(),
                    angle: 0.0,
                },
            },
            RotationMode::EulerXyz => {
                let (x, y, z) = rotation.euler_angles();
                RotationValue::EulerXyz { x, y, z }
            }
        }
    }

    /// Returns the mode this value is expressed in.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        match self {
            RotationValue::Quaternion(_) => RotationMode::Quaternion,
            RotationValue::AxisAngle { .. } => RotationMode::AxisAngle,
            RotationValue::EulerXyz { .. } => RotationMode::EulerXyz,
        }
    }

    /// Converts back to a unit quaternion.
    ///
    /// A zero-length axis is read as the identity rotation.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion {
        match *self {
            RotationValue::Quaternion(q) => q,
            RotationValue::AxisAngle { axis, angle } => Unit::try_new(axis, TOLERANCE)
                .map_or_else(UnitQuaternion::identity, |axis| {
                    UnitQuaternion::from_axis_angle(&axis, angle)
                }),
            RotationValue::EulerXyz { x, y, z } => UnitQuaternion::from_euler_angles(x, y, z),
        }
    }
}

/// A 3D cursor: a location plus a rotation kept in a user-chosen representation.
///
/// Applying a placement never changes the cursor's rotation mode; the new
/// rotation is converted into the current representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    location: Point3,
    rotation: RotationValue,
}

impl Cursor {
    /// Creates a cursor at the origin with no rotation, stored in `mode`.
    #[must_use]
    pub fn new(mode: RotationMode) -> Self {
        Self {
            location: Point3::origin(),
            rotation: RotationValue::from_quaternion(mode, &UnitQuaternion::identity()),
        }
    }

    /// Returns the cursor location.
    #[must_use]
    pub fn location(&self) -> &Point3 {
        &self.location
    }

    /// Moves the cursor.
    pub fn set_location(&mut self, location: Point3) {
        self.location = location;
    }

    /// Returns the rotation mode.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        self.rotation.mode()
    }

    /// Switches the rotation mode, converting the stored rotation.
    pub fn set_mode(&mut self, mode: RotationMode) {
        if mode != self.mode() {
            self.rotation = RotationValue::from_quaternion(mode, &self.rotation.to_quaternion());
        }
    }

    /// Returns the rotation in its stored representation.
    #[must_use]
    pub fn rotation_value(&self) -> &RotationValue {
        &self.rotation
    }

    /// Returns the rotation as a unit quaternion.
    #[must_use]
    pub fn rotation(&self) -> UnitQuaternion {
        self.rotation.to_quaternion()
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(RotationMode::default())
    }
}

impl PlacementSink for Cursor {
    fn apply(&mut self, placement: &CursorPlacement) {
        self.rotation = RotationValue::from_quaternion(self.mode(), &placement.rotation);
        if let Some(position) = placement.position {
            self.location = position;
        }
    }
}
