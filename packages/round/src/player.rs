use crate::{Card, Error, Hand};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stand,
    Double,
    Split,
}

impl Move {
    /// Input symbol accepted at the table prompt
    pub fn symbol(&self) -> &'static str {
        match self {
            Move::Hit => "h",
            Move::Stand => "s",
            Move::Double => "d",
            Move::Split => "sp",
        }
    }

    /// Prompt fragment, e.g. `(h)it`
    pub fn label(&self) -> &'static str {
        match self {
            Move::Hit => "(h)it",
            Move::Stand => "(s)tand",
            Move::Double => "(d)ouble down",
            Move::Split => "(sp)lit",
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Move::Hit),
            "s" | "stand" => Ok(Move::Stand),
            "d" | "double" => Ok(Move::Double),
            "sp" | "split" => Ok(Move::Split),
            other => Err(Error::UnknownMove(other.to_string())),
        }
    }
}

/// Everything a move source gets to see when asked for a decision.
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest<'a> {
    /// Index of the hand being played; always 0 unless the round was split
    pub hand_index: usize,
    pub split: bool,
    /// Every player hand in the round; `hand` is `hands[hand_index]`
    pub hands: &'a [Hand],
    pub hand: &'a Hand,
    pub dealer_up_card: Card,
    pub legal: &'a [Move],
}

impl MoveRequest<'_> {
    pub fn allows(&self, mv: Move) -> bool {
        self.legal.contains(&mv)
    }
}

/// Supplies player decisions to a round.
///
/// An illegal answer is simply asked again; return an error only when no
/// more input can be produced.
pub trait MoveSource {
    fn choose(&mut self, request: &MoveRequest<'_>) -> Result<Move, Error>;
}

impl<F> MoveSource for F
where
    F: FnMut(&MoveRequest<'_>) -> Result<Move, Error>,
{
    fn choose(&mut self, request: &MoveRequest<'_>) -> Result<Move, Error> {
        self(request)
    }
}

/// Replays a fixed list of moves.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    moves: VecDeque<Move>,
    requests: usize,
}

impl Scripted {
    pub fn new(moves: &[Move]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            requests: 0,
        }
    }

    /// How many times a move was requested
    pub fn requests(&self) -> usize {
        self.requests
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for Scripted {
    fn choose(&mut self, _request: &MoveRequest<'_>) -> Result<Move, Error> {
        self.requests += 1;
        self.moves.pop_front().ok_or(Error::MovesExhausted)
    }
}
