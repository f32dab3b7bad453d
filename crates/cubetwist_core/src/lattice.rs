//! Cubie lattice and face membership.

use std::ops::Index;

use cubemath::{Axis, IndexOutOfRange, Sign};
use itertools::iproduct;

use crate::cubie::{Cubie, CubieInfo, PerCubie};
use crate::error::CubeError;
use crate::face::Face;

/// Number of cubies in the lattice.
pub const CUBIE_COUNT: usize = 27;

/// Distance between the centers of adjacent cubies.
///
/// Cubies have edge length 1, so this leaves a small gap between them.
pub const CUBIE_SPACING: f32 = 1.1;

/// Cubie identifiers in the layer of each face, indexed by [`Face::index()`].
///
/// This table is the single source of truth for face membership. Each row
/// lists nine identifiers in ascending order; each cubie appears in exactly
/// three rows, one per axis.
pub const PARTITION: [[u8; 9]; 9] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],          // front
    [18, 19, 20, 21, 22, 23, 24, 25, 26], // back
    [0, 3, 6, 9, 12, 15, 18, 21, 24],     // left
    [2, 5, 8, 11, 14, 17, 20, 23, 26],    // right
    [0, 1, 2, 9, 10, 11, 18, 19, 20],     // up
    [6, 7, 8, 15, 16, 17, 24, 25, 26],    // down
    [1, 4, 7, 10, 13, 16, 19, 22, 25],    // middle
    [3, 4, 5, 12, 13, 14, 21, 22, 23],    // equator
    [9, 10, 11, 12, 13, 14, 15, 16, 17],  // standing
];

/// Returns the identifiers of the nine cubies in the layer of `face`, in
/// ascending order.
pub fn members_of(face: Face) -> [Cubie; 9] {
    PARTITION[face.index()].map(Cubie)
}

/// Position of a cubie in the lattice, with each component in `0..3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LatticeCoord(pub [usize; 3]);

impl Index<Axis> for LatticeCoord {
    type Output = usize;

    fn index(&self, axis: Axis) -> &usize {
        &self.0[axis.int()]
    }
}

impl LatticeCoord {
    /// Constructs a coordinate, or returns an error if any component is out
    /// of range.
    pub fn new(x: usize, y: usize, z: usize) -> Result<Self, CubeError> {
        if x < 3 && y < 3 && z < 3 {
            Ok(LatticeCoord([x, y, z]))
        } else {
            Err(CubeError::OutOfRange { x, y, z })
        }
    }

    /// Returns the index of the coordinate in construction order: Z-major,
    /// then Y, then X.
    pub fn index(self) -> usize {
        let LatticeCoord([x, y, z]) = self;
        z * 9 + y * 3 + x
    }

    /// Returns the sign of the coordinate's offset from the center of the
    /// cube along `axis`.
    pub fn offset_sign(self, axis: Axis) -> Sign {
        match self[axis] {
            0 => Sign::Neg,
            1 => Sign::Zero,
            _ => Sign::Pos,
        }
    }

    /// Returns the world-space offset of the cubie's center from the center
    /// of the cube.
    pub fn translation(self) -> [f32; 3] {
        [Axis::X, Axis::Y, Axis::Z].map(|axis| self.offset_sign(axis).float() * CUBIE_SPACING)
    }
}

/// The 27 cubies of the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLattice {
    cubies: PerCubie<CubieInfo>,
}

impl Default for CubeLattice {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeLattice {
    /// Constructs a lattice of 27 unclaimed cubies.
    pub fn new() -> Self {
        let cubies = iproduct!(0..3, 0..3, 0..3)
            .map(|(z, y, x)| CubieInfo::new(LatticeCoord([x, y, z])))
            .collect();
        CubeLattice { cubies }
    }

    /// Returns the cubie with the given identifier.
    pub fn cubie(&self, cubie: Cubie) -> Result<&CubieInfo, IndexOutOfRange> {
        self.cubies.get(cubie)
    }

    /// Returns the cubie at the given lattice position.
    pub fn cubie_at(&self, x: usize, y: usize, z: usize) -> Result<&CubieInfo, CubeError> {
        let coord = LatticeCoord::new(x, y, z)?;
        Ok(&self.cubies[Cubie(coord.index() as u8)])
    }

    /// Iterates over all cubies in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (Cubie, &CubieInfo)> {
        self.cubies.iter()
    }

    /// Marks the nine cubies in the layer of `face` as claimed by `face`.
    ///
    /// A cubie already claimed by another face is stolen from it, with a
    /// warning.
    pub(crate) fn claim(&mut self, face: Face) {
        for cubie in members_of(face) {
            let info = &mut self.cubies[cubie];
            if let Some(owner) = info.claimed_by.filter(|&owner| owner != face) {
                log::warn!("cubie {cubie} stolen from face {owner} by face {face}");
            }
            info.claimed_by = Some(face);
        }
    }

    /// Releases every cubie from its face group.
    pub fn release_all(&mut self) {
        for info in self.cubies.iter_values_mut() {
            info.claimed_by = None;
        }
    }
}
