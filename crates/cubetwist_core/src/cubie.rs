//! Cubie identifiers and per-cubie data.

use cubemath::GenericVec;

use crate::color::Color;
use crate::face::Face;
use crate::lattice::LatticeCoord;
use crate::mesh::{CubieMesh, FACELET_FACES};

cubemath::idx_struct! {
    /// Identifier of a cubie, in lattice construction order.
    pub struct Cubie(pub u8);
}

/// List containing a value per cubie.
pub type PerCubie<T> = GenericVec<Cubie, T>;

/// Data for one cubie.
#[derive(Debug, Clone, PartialEq)]
pub struct CubieInfo {
    /// Home position of the cubie in the lattice.
    pub coord: LatticeCoord,
    /// Colors of the six facelets, in facelet order.
    pub facelet_colors: [Color; 6],
    /// Mesh for rendering the cubie.
    pub mesh: CubieMesh,
    /// Face group currently holding the cubie, if any.
    pub claimed_by: Option<Face>,
}

impl CubieInfo {
    /// Constructs the cubie that lives at `coord`. Facelets on the surface of
    /// the cube take the color of the face they sit on; hidden facelets are
    /// gray.
    pub fn new(coord: LatticeCoord) -> Self {
        let facelet_colors = FACELET_FACES.map(|face| match face.color() {
            Some(color) if coord[face.axis()] == face.lattice_layer() => color,
            _ => Color::Gray,
        });
        CubieInfo {
            coord,
            facelet_colors,
            mesh: CubieMesh::new(facelet_colors),
            claimed_by: None,
        }
    }
}
