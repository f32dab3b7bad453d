//! Functions for verifying log files.

use cubetwist_core::{Face, TwistDirection};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{LogFile, Timestamp, notation};

/// Verifies a log file.
///
/// Returns `None` if the log is structurally invalid: unparseable twist
/// notation, a gap in the sequence numbers, or a recorded twist of a middle
/// slice.
pub fn verify(log_file: &LogFile) -> Option<LogVerification> {
    let notation_moves: Vec<(Face, TwistDirection)> =
        match notation::parse_moves(&log_file.twists).try_collect() {
            Ok(moves) => moves,
            Err(e) => {
                log::error!("bad twist notation in log file: {e}");
                return None;
            }
        };

    for (i, record) in log_file.moves.iter().enumerate() {
        if record.seq as usize != i {
            log::error!("move {i} has sequence number {}", record.seq);
            return None;
        }
        if record.face.twist_sign().is_none() {
            log::error!("move {i} twists face {}, which cannot be twisted", record.face);
            return None;
        }
    }

    let recorded_moves = log_file
        .moves
        .iter()
        .map(|record| (record.face, record.direction))
        .collect_vec();
    let is_notation_consistent = notation_moves == recorded_moves;
    if !is_notation_consistent {
        log::warn!("twist notation does not match the recorded moves");
    }

    log::info!("verified log file with {} moves", log_file.moves.len());

    Some(LogVerification {
        move_count: log_file.moves.len(),
        is_notation_consistent,
        first_move_time: log_file.moves.first().map(|record| record.time),
        last_move_time: log_file.moves.last().map(|record| record.time),
    })
}

/// Facts learned from verifying a log file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogVerification {
    /// Number of twists in the log.
    pub move_count: usize,
    /// Whether the twist notation matches the recorded moves.
    pub is_notation_consistent: bool,
    /// Time of the first recorded move.
    pub first_move_time: Option<Timestamp>,
    /// Time of the last recorded move.
    pub last_move_time: Option<Timestamp>,
}
