//! Input commands for driving a cube session.

use serde::{Deserialize, Serialize};

/// Input command, bound to a single key.
///
/// Populate commands claim the three layers along one axis; twist commands
/// rotate one of the currently populated layers. Twist keys are the initials
/// of the face colors.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Claim the front, back, and standing layers (`Q`).
    PopulateFrontBack,
    /// Twist the blue front face (`B`).
    TwistFront,
    /// Twist the green back face (`G`).
    TwistBack,
    /// Claim the left, right, and middle layers (`A`).
    PopulateLeftRight,
    /// Twist the orange left face (`O`).
    TwistLeft,
    /// Twist the red right face (`R`).
    TwistRight,
    /// Claim the up, down, and equator layers (`Z`).
    PopulateUpDown,
    /// Twist the yellow up face (`Y`).
    TwistUp,
    /// Twist the white down face (`W`).
    TwistDown,
    /// Return the cube to its initial state (`D`).
    Reset,
}

impl Command {
    /// All commands, in declaration order.
    pub const ALL: [Command; 10] = [
        Command::PopulateFrontBack,
        Command::TwistFront,
        Command::TwistBack,
        Command::PopulateLeftRight,
        Command::TwistLeft,
        Command::TwistRight,
        Command::PopulateUpDown,
        Command::TwistUp,
        Command::TwistDown,
        Command::Reset,
    ];

    /// Returns the command bound to `key`, ignoring case.
    pub fn from_key(key: char) -> Option<Command> {
        match key.to_ascii_uppercase() {
            'Q' => Some(Command::PopulateFrontBack),
            'B' => Some(Command::TwistFront),
            'G' => Some(Command::TwistBack),
            'A' => Some(Command::PopulateLeftRight),
            'O' => Some(Command::TwistLeft),
            'R' => Some(Command::TwistRight),
            'Z' => Some(Command::PopulateUpDown),
            'Y' => Some(Command::TwistUp),
            'W' => Some(Command::TwistDown),
            'D' => Some(Command::Reset),
            _ => None,
        }
    }

    /// Returns the key the command is bound to.
    pub fn key(self) -> char {
        match self {
            Command::PopulateFrontBack => 'Q',
            Command::TwistFront => 'B',
            Command::TwistBack => 'G',
            Command::PopulateLeftRight => 'A',
            Command::TwistLeft => 'O',
            Command::TwistRight => 'R',
            Command::PopulateUpDown => 'Z',
            Command::TwistUp => 'Y',
            Command::TwistDown => 'W',
            Command::Reset => 'D',
        }
    }
}
