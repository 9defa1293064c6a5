mod card;
mod deck;
mod error;
mod hand;
mod outcome;
mod player;
mod round;
mod rules;
mod strategy;
#[cfg(feature = "simulate")]
mod simulation;

pub use card::{Card, Suit};
pub use deck::{draw, DealtSet, Deck};
pub use error::Error;
pub use hand::{
    calculate_hand_value, can_split_cards, is_blackjack, is_busted, is_soft_hand, Hand,
};
pub use outcome::{
    combine_split, compare, resolve, DealerState, HandResult, Play, PlayerHand, RoundOutcome,
};
pub use player::{Move, MoveRequest, MoveSource, Scripted};
pub use round::{play_round, Round, RoundPhase, RoundReport};
pub use rules::{dealer_should_hit, Payout, BLACKJACK, DEALER_STANDS_ON};
pub use strategy::{optimal_move, BasicStrategy};
#[cfg(feature = "simulate")]
pub use simulation::{Simulation, SimulationResult};
