//! State model for an interactive 3x3x3 puzzle cube.
//!
//! The cube is a lattice of 27 textured cubies. Cubies are claimed by [face
//! groups](FaceGroup) that rotate rigidly about the coordinate axes, one
//! quarter turn at a time, each face in a single fixed direction.

mod color;
mod cubie;
mod error;
mod face;
mod group;
mod lattice;
mod mesh;

#[cfg(test)]
mod tests;

/// Re-export of `cubemath`.
pub use cubemath;

pub use crate::color::Color;
pub use crate::cubie::{Cubie, CubieInfo, PerCubie};
pub use crate::error::CubeError;
pub use crate::face::{Face, TwistDirection};
pub use crate::group::FaceGroup;
pub use crate::lattice::{
    CUBIE_COUNT, CUBIE_SPACING, CubeLattice, LatticeCoord, PARTITION, members_of,
};
pub use crate::mesh::{CubieMesh, FACELET_FACES};
