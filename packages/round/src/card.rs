use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Suit for an index in `0..=3`; anything outside is clamped to the nearest bound.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.clamp(0, 3) as usize]
    }

    pub fn index(&self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    pub fn short(&self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// A playing card. Rank runs 1 (Ace) through 13 (King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const QUEEN: u8 = 12;
    pub const KING: u8 = 13;

    /// Number of distinct cards in the deck.
    pub const COUNT: u8 = 52;

    /// Builds a card, clamping rank into `1..=13` and suit into `0..=3`.
    pub fn new(rank: i32, suit: i32) -> Self {
        Self {
            rank: rank.clamp(Self::ACE as i32, Self::KING as i32) as u8,
            suit: Suit::from_index(suit),
        }
    }

    /// Builds a card from its flattened identity `(rank - 1) * 4 + suit`.
    /// Identities outside `0..=51` are clamped.
    pub fn from_index(index: i32) -> Self {
        let index = index.clamp(0, Self::COUNT as i32 - 1);
        Self::new(index / 4 + 1, index % 4)
    }

    pub fn index(&self) -> u8 {
        (self.rank - 1) * 4 + self.suit.index()
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Self::ACE
    }

    /// Point value with the Ace counted high.
    pub fn value(&self) -> u8 {
        match self.rank {
            Self::ACE => 11,
            r if r >= 10 => 10,
            r => r,
        }
    }

    pub fn rank_name(&self) -> String {
        match self.rank {
            Self::ACE => "Ace".to_string(),
            Self::JACK => "Jack".to_string(),
            Self::QUEEN => "Queen".to_string(),
            Self::KING => "King".to_string(),
            r => r.to_string(),
        }
    }

    /// At most two characters: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn rank_short(&self) -> String {
        match self.rank {
            Self::ACE => "A".to_string(),
            Self::JACK => "J".to_string(),
            Self::QUEEN => "Q".to_string(),
            Self::KING => "K".to_string(),
            r => r.to_string(),
        }
    }

    /// `Ace of Hearts`
    pub fn long_label(&self) -> String {
        format!("{} of {}", self.rank_name(), self.suit.name())
    }

    /// `A-H`
    pub fn short_label(&self) -> String {
        format!("{}-{}", self.rank_short(), self.suit.short())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_label())
    }
}
