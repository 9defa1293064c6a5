use crate::{Move, RoundPhase};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Illegal move {mv:?} during {phase:?}")]
    IllegalMove { mv: Move, phase: RoundPhase },
    #[error("Unrecognized move: {0:?}")]
    UnknownMove(String),
    #[error("Move source has no more moves")]
    MovesExhausted,
    #[error("Move source error: {0}")]
    MoveSource(String),
    #[error("Invalid payout: {0}")]
    InvalidPayout(&'static str),
}
