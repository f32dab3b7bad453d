//! Rotation algebra for quarter turns about the coordinate axes.

use std::ops::{Add, AddAssign};

use cgmath::{Deg, Matrix4};

use crate::{Axis, Sign};

/// Signed number of quarter turns.
///
/// The raw count accumulates without bound as turns are applied;
/// [`QuarterTurns::normalized()`] folds it into a single rotation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct QuarterTurns(i32);

impl QuarterTurns {
    /// No turns.
    pub const ZERO: QuarterTurns = QuarterTurns(0);

    /// Constructs a turn count from a raw number of quarter turns.
    pub const fn new(count: i32) -> Self {
        QuarterTurns(count)
    }

    /// Returns the raw number of quarter turns applied, which may be any
    /// integer.
    pub const fn count(self) -> i32 {
        self.0
    }

    /// Returns the equivalent number of quarter turns in the range `-2..=2`.
    ///
    /// Half turns keep the sign of the raw count, so two clockwise quarter
    /// turns normalize to `2` while two counterclockwise ones normalize to
    /// `-2`.
    pub const fn normalized(self) -> i32 {
        match self.0.rem_euclid(4) {
            0 => 0,
            1 => 1,
            3 => -1,
            _ => {
                if self.0 < 0 { -2 } else { 2 }
            }
        }
    }

    /// Returns whether the rotation is a whole number of full turns.
    pub const fn is_identity(self) -> bool {
        self.normalized() == 0
    }

    /// Returns the normalized rotation angle in degrees, in the range
    /// `-180..=180`.
    pub const fn degrees(self) -> i32 {
        self.normalized() * 90
    }
}

impl Add for QuarterTurns {
    type Output = QuarterTurns;

    fn add(self, rhs: QuarterTurns) -> QuarterTurns {
        QuarterTurns(self.0 + rhs.0)
    }
}
impl AddAssign<Sign> for QuarterTurns {
    fn add_assign(&mut self, rhs: Sign) {
        self.0 += rhs.int() as i32;
    }
}

/// Rotation by a whole number of quarter turns about a coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AxisRotation {
    /// Axis to rotate around.
    pub axis: Axis,
    /// Number of quarter turns to rotate by.
    pub turns: QuarterTurns,
}

impl AxisRotation {
    /// Constructs the identity rotation about `axis`.
    pub const fn identity(axis: Axis) -> Self {
        AxisRotation {
            axis,
            turns: QuarterTurns::ZERO,
        }
    }

    /// Returns whether the rotation leaves everything where it started.
    pub const fn is_identity(self) -> bool {
        self.turns.is_identity()
    }

    /// Returns the rotation as a transformation matrix.
    pub fn matrix(self) -> Matrix4<f32> {
        let angle = Deg(self.turns.degrees() as f32);
        match self.axis {
            Axis::X => Matrix4::from_angle_x(angle),
            Axis::Y => Matrix4::from_angle_y(angle),
            Axis::Z => Matrix4::from_angle_z(angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quarter_turn_normalization() {
        assert_eq!(QuarterTurns::new(0).normalized(), 0);
        assert_eq!(QuarterTurns::new(1).normalized(), 1);
        assert_eq!(QuarterTurns::new(3).normalized(), -1);
        assert_eq!(QuarterTurns::new(4).normalized(), 0);
        assert_eq!(QuarterTurns::new(5).normalized(), 1);
        assert_eq!(QuarterTurns::new(-1).normalized(), -1);
        assert_eq!(QuarterTurns::new(-3).normalized(), 1);
        assert_eq!(QuarterTurns::new(-4).normalized(), 0);

        // Half turns keep the sign of the raw count.
        assert_eq!(QuarterTurns::new(2).normalized(), 2);
        assert_eq!(QuarterTurns::new(-2).normalized(), -2);
        assert_eq!(QuarterTurns::new(6).normalized(), 2);
        assert_eq!(QuarterTurns::new(-6).normalized(), -2);
    }

    #[test]
    fn test_half_turn_degrees() {
        let mut turns = QuarterTurns::ZERO;
        turns += Sign::Neg;
        turns += Sign::Neg;
        assert_eq!(turns.count(), -2);
        assert_eq!(turns.degrees(), -180);
    }

    #[test]
    fn test_rotation_matrix() {
        let rot = AxisRotation {
            axis: Axis::Z,
            turns: QuarterTurns::new(5),
        };
        assert_eq!(rot.matrix(), Matrix4::from_angle_z(Deg(90.0)));

        assert!(AxisRotation::identity(Axis::X).is_identity());
        assert_eq!(
            AxisRotation::identity(Axis::X).matrix(),
            Matrix4::from_angle_x(Deg(0.0)),
        );
    }
}
