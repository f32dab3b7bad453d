//! Interactive session state for a Cubetwist cube: commands, camera, and
//! draw-state assembly.

mod camera;
mod commands;
mod draw;
mod session;


pub use crate::camera::OrbitCamera;
pub use crate::commands::Command;
pub use crate::draw::{DrawCubie, DrawGroup, DrawState, Renderer};
pub use crate::session::CubeSession;
