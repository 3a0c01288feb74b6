use super::Vector3;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of the axis (`X = 0`, `Y = 1`, `Z = 2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The next axis in cyclic order (`X → Y → Z → X`).
    #[must_use]
    pub const fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Unit vector along the positive half of the axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// Sign of a dominant component. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of `value`, mapping `0.0` to [`Sign::Positive`].
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// `+1.0` or `-1.0`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// The signed world axis a direction vector is closest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MajorAxis {
    /// Axis with the largest absolute component.
    pub axis: Axis,
    /// Sign of that component.
    pub sign: Sign,
}

impl MajorAxis {
    /// Classifies a direction by its largest absolute component.
    ///
    /// Ties are broken in a fixed order: X beats Y and Z, and Z beats Y.
    /// So `(1, 1, 0)` snaps to X and `(0, 1, 1)` snaps to Z.
    ///
    /// The direction is expected to be non-zero; a zero vector classifies as `+X`.
    #[must_use]
    pub fn of(v: &Vector3) -> Self {
        let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
        let axis = if ax >= ay {
            if ax >= az {
                Axis::X
            } else {
                Axis::Z
            }
        } else if ay >= az {
            Axis::Y
        } else {
            Axis::Z
        };
        Self {
            axis,
            sign: Sign::of(v[axis.index()]),
        }
    }

    /// Unit vector of the signed axis, e.g. `(0, -1, 0)` for `-Y`.
    #[must_use]
    pub fn unit(&self) -> Vector3 {
        self.axis.unit() * self.sign.as_f64()
    }
}
