//! Faces of the cube, including the middle slices.

use cubemath::{Axis, Sign};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One of the nine rotatable layers of the cube: six outer faces plus the
/// three middle slices.
///
/// Following screen conventions, [`Face::Up`] sits at negative Y and
/// [`Face::Front`] at negative Z. The middle slices take their names from
/// standard cube notation: M between left and right, E between up and down, S
/// between front and back.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Face {
    /// Blue face at negative Z.
    Front,
    /// Green face at positive Z.
    Back,
    /// Orange face at negative X.
    Left,
    /// Red face at positive X.
    Right,
    /// Yellow face at negative Y.
    Up,
    /// White face at positive Y.
    Down,
    /// Middle slice between left and right.
    Middle,
    /// Middle slice between up and down.
    Equator,
    /// Middle slice between front and back.
    Standing,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 9;

    /// Returns the face in the layer of `axis` with the given position sign.
    pub const fn at(axis: Axis, position_sign: Sign) -> Face {
        match (axis, position_sign) {
            (Axis::X, Sign::Neg) => Face::Left,
            (Axis::X, Sign::Zero) => Face::Middle,
            (Axis::X, Sign::Pos) => Face::Right,
            (Axis::Y, Sign::Neg) => Face::Up,
            (Axis::Y, Sign::Zero) => Face::Equator,
            (Axis::Y, Sign::Pos) => Face::Down,
            (Axis::Z, Sign::Neg) => Face::Front,
            (Axis::Z, Sign::Zero) => Face::Standing,
            (Axis::Z, Sign::Pos) => Face::Back,
        }
    }

    /// Returns the index of the face, matching its declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to the face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right | Face::Middle => Axis::X,
            Face::Up | Face::Down | Face::Equator => Axis::Y,
            Face::Front | Face::Back | Face::Standing => Axis::Z,
        }
    }

    /// Returns the sign of the face's offset from the center of the cube
    /// along its axis. Middle slices have sign zero.
    pub const fn position_sign(self) -> Sign {
        match self {
            Face::Front | Face::Left | Face::Up => Sign::Neg,
            Face::Back | Face::Right | Face::Down => Sign::Pos,
            Face::Middle | Face::Equator | Face::Standing => Sign::Zero,
        }
    }

    /// Returns the rotation sign of the face's fixed twist direction, or
    /// `None` for the middle slices, which cannot be twisted.
    ///
    /// Faces on the negative side of the cube twist positively and vice
    /// versa.
    pub const fn twist_sign(self) -> Option<Sign> {
        match self.position_sign() {
            Sign::Neg => Some(Sign::Pos),
            Sign::Zero => None,
            Sign::Pos => Some(Sign::Neg),
        }
    }

    /// Returns the lattice layer (0, 1, or 2) occupied by the face's cubies.
    pub fn lattice_layer(self) -> usize {
        (self.position_sign().int() + 1) as usize
    }

    /// Returns the color of the face's facelets, or `None` for the middle
    /// slices.
    pub const fn color(self) -> Option<Color> {
        match self {
            Face::Front => Some(Color::Blue),
            Face::Back => Some(Color::Green),
            Face::Left => Some(Color::Orange),
            Face::Right => Some(Color::Red),
            Face::Up => Some(Color::Yellow),
            Face::Down => Some(Color::White),
            Face::Middle | Face::Equator | Face::Standing => None,
        }
    }

    /// Returns the three layers along `axis`, outer faces first.
    pub const fn layers_along(axis: Axis) -> [Face; 3] {
        [
            Face::at(axis, Sign::Neg),
            Face::at(axis, Sign::Pos),
            Face::at(axis, Sign::Zero),
        ]
    }
}

/// Direction of a twist.
///
/// Every face twists in a single hard-coded direction, so this has one
/// variant. Commands and log records still carry it.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TwistDirection {
    /// The face's fixed quarter-turn direction.
    #[default]
    Clockwise,
}

impl TwistDirection {
    /// Returns the rotation sign for twisting `face` in this direction, or
    /// `None` if the face cannot be twisted.
    pub fn sign_for(self, face: Face) -> Option<Sign> {
        match self {
            TwistDirection::Clockwise => face.twist_sign(),
        }
    }
}
