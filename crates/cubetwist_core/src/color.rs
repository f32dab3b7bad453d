//! Palette of facelet colors.

/// Color of a cubie facelet.
///
/// The ordering matches the column order of the texture atlas: a single row
/// of seven equal-width swatches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    /// Color of the right face.
    Red,
    /// Color of the back face.
    Green,
    /// Color of the front face.
    Blue,
    /// Color of the up face.
    Yellow,
    /// Color of the left face.
    Orange,
    /// Color of the down face.
    White,
    /// Color of facelets hidden inside the cube.
    Gray,
}

impl Color {
    /// Number of swatches in the texture atlas.
    pub const ATLAS_COLUMNS: usize = 7;

    /// Returns the column of the color's swatch in the texture atlas.
    pub const fn atlas_column(self) -> usize {
        self as usize
    }

    /// Returns the texture coordinates of the center of the color's swatch.
    pub fn atlas_uv(self) -> (f32, f32) {
        let u = (self.atlas_column() as f32 + 0.5) / Self::ATLAS_COLUMNS as f32;
        (u, 0.5)
    }
}
