//! Error types.

use crate::face::Face;

/// Error from a cube operation.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("lattice coordinate ({x}, {y}, {z}) is out of range")]
    OutOfRange { x: usize, y: usize, z: usize },
    #[error("face group {0} is already populated")]
    AlreadyPopulated(Face),
    #[error("face group {0} is not populated")]
    NotPopulated(Face),
    #[error("face {0} cannot be twisted")]
    UntwistableFace(Face),
}
