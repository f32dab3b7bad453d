//! Functions for parsing and formatting cube twist notation.
//!
//! A twist is written as the initial of its face's color (`B` for the blue
//! front face, `G` green back, `O` orange left, `R` red right, `Y` yellow up,
//! `W` white down), and a sequence of twists is separated by whitespace. Every
//! face twists in one fixed direction, so a letter is a complete move.

use cubetwist_core::{Color, Face, TwistDirection};
use itertools::Itertools;
use strum::IntoEnumIterator;

/// Formats a sequence of twists as a string.
///
/// Middle slices have no letter and are skipped.
pub fn format_moves(moves: impl IntoIterator<Item = (Face, TwistDirection)>) -> String {
    moves
        .into_iter()
        .filter_map(|(face, _)| face_letter(face))
        .join(" ")
}

/// Parses a sequence of twists.
pub fn parse_moves(
    s: &str,
) -> impl Iterator<Item = Result<(Face, TwistDirection), NotationParseError<'_>>> {
    s.split_whitespace().map(parse_move)
}

/// Parses a single twist.
fn parse_move(word: &str) -> Result<(Face, TwistDirection), NotationParseError<'_>> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let face = face_from_letter(c).ok_or(NotationParseError::BadMove(word))?;
            Ok((face, TwistDirection::Clockwise))
        }
        _ => Err(NotationParseError::BadMove(word)),
    }
}

/// Returns the notation letter for a face, or `None` for the middle slices.
pub fn face_letter(face: Face) -> Option<char> {
    match face.color()? {
        Color::Red => Some('R'),
        Color::Green => Some('G'),
        Color::Blue => Some('B'),
        Color::Yellow => Some('Y'),
        Color::Orange => Some('O'),
        Color::White => Some('W'),
        Color::Gray => None,
    }
}

/// Returns the face whose notation letter is `c`.
fn face_from_letter(c: char) -> Option<Face> {
    Face::iter().find(|&face| face_letter(face) == Some(c))
}

/// Error encountered while parsing a twist.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NotationParseError<'a> {
    #[error("bad move: {0:?}")]
    BadMove(&'a str),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_notation_round_trip() {
        let moves = [
            (Face::Front, TwistDirection::Clockwise),
            (Face::Back, TwistDirection::Clockwise),
            (Face::Up, TwistDirection::Clockwise),
            (Face::Front, TwistDirection::Clockwise),
        ];
        let s = format_moves(moves);
        assert_eq!(s, "B G Y B");

        let parsed: Vec<_> = parse_moves(&s).map(Result::unwrap).collect();
        assert_eq!(parsed, moves.to_vec());
    }

    #[test]
    fn test_letters_are_distinct() {
        let letters: Vec<char> = Face::iter().filter_map(face_letter).collect();
        assert_eq!(letters, vec!['B', 'G', 'O', 'R', 'Y', 'W']);
        for &c in &letters {
            let face = face_from_letter(c).unwrap();
            assert_eq!(face_letter(face), Some(c));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_move("X"),
            Err(NotationParseError::BadMove("X"))
        );
        assert_eq!(
            parse_move("BB"),
            Err(NotationParseError::BadMove("BB"))
        );
        assert!(parse_moves("B  G\n W").all(|result| result.is_ok()));
        assert_eq!(parse_moves("").count(), 0);
    }
}
