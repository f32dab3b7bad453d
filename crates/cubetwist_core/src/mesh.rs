//! Triangle mesh for a single cubie.

use strum::IntoEnumIterator;

use crate::color::Color;
use crate::face::Face;

/// Faces of the cube in facelet order.
///
/// The color array of a cubie and the triangle list of its mesh both follow
/// this order.
pub const FACELET_FACES: [Face; 6] = [
    Face::Front,
    Face::Right,
    Face::Up,
    Face::Back,
    Face::Left,
    Face::Down,
];

/// Corners of a cubie. The unit cube is centered on the origin, so every
/// coordinate is ±0.5.
const CORNERS: [[f32; 3]; 8] = [
    [0.5, 0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, -0.5],
];

/// Two triangles per facelet, as indices into [`CORNERS`], in facelet order.
/// Winding is outward-facing.
const FACELET_TRIANGLES: [[[u32; 3]; 2]; 6] = [
    [[2, 3, 6], [3, 7, 6]], // front
    [[0, 1, 2], [2, 1, 3]], // right
    [[1, 5, 3], [5, 7, 3]], // up
    [[0, 4, 1], [4, 5, 1]], // back
    [[4, 6, 5], [6, 7, 5]], // left
    [[0, 2, 4], [2, 6, 4]], // down
];

/// Triangle mesh for one cubie, with every facelet textured by a solid
/// swatch of the color atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct CubieMesh {
    /// Corner positions, 3 floats per vertex.
    pub vertex_positions: Vec<f32>,
    /// Texture coordinates, 2 floats per atlas swatch.
    pub uv_coords: Vec<f32>,
    /// Corner indices of each triangle.
    pub triangles: Vec<[u32; 3]>,
    /// Atlas swatch sampled by each triangle, parallel to `triangles`.
    pub triangle_uv_slots: Vec<u32>,
}

impl CubieMesh {
    /// Constructs the mesh for a cubie with the given facelet colors.
    pub fn new(facelet_colors: [Color; 6]) -> Self {
        let vertex_positions = CORNERS.iter().flatten().copied().collect();

        let uv_coords = Color::iter()
            .flat_map(|color| {
                let (u, v) = color.atlas_uv();
                [u, v]
            })
            .collect();

        let mut triangles = vec![];
        let mut triangle_uv_slots = vec![];
        for (facelet, facelet_triangles) in FACELET_TRIANGLES.iter().enumerate() {
            for &triangle in facelet_triangles {
                triangles.push(triangle);
                triangle_uv_slots.push(facelet_colors[facelet].atlas_column() as u32);
            }
        }

        CubieMesh {
            vertex_positions,
            uv_coords,
            triangles,
            triangle_uv_slots,
        }
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertex_positions.len() / 3
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
