//! Per-frame draw state handed to a renderer.

use cgmath::{Matrix4, Vector3};
use cubetwist_core::{Cubie, Face};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct DrawState {
    /// View matrix from the orbit camera.
    pub view: Matrix4<f32>,
    /// Cubies grouped by the rotation applied to them. The unclaimed rest
    /// group is last.
    pub groups: Vec<DrawGroup>,
}

/// A set of cubies sharing one rigid rotation.
#[derive(Debug, Clone)]
pub struct DrawGroup {
    /// Face that owns the group, or `None` for the unclaimed rest group.
    pub face: Option<Face>,
    /// Rotation applied to every member before its translation.
    pub rotation: Matrix4<f32>,
    /// Cubies drawn with this rotation.
    pub members: Vec<DrawCubie>,
}

/// One cubie's placement within a draw group.
#[derive(Debug, Copy, Clone)]
pub struct DrawCubie {
    /// ID of the cubie, for mesh lookup.
    pub cubie: Cubie,
    /// Offset of the cubie from the cube center.
    pub translation: Vector3<f32>,
}

/// External renderer that a session draws through.
pub trait Renderer {
    /// Draws one frame.
    fn draw(&mut self, state: &DrawState);
}
