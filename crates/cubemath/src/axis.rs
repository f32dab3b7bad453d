//! Axis enum.

/// Axis in 3D space.
///
/// The coordinate system follows screen conventions: X points to the right, Y
/// points down, and Z points away from the viewer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (rightward).
    X = 0,
    /// Y axis (downward).
    Y = 1,
    /// Z axis (into the screen).
    Z = 2,
}

impl Axis {
    /// Number of axes in 3D space.
    pub const COUNT: usize = 3;

    /// Returns an integer representation of the axis (X=0, Y=1, Z=2).
    pub const fn int(self) -> usize {
        self as usize
    }

    /// Iterates over all axes in order.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }
}
