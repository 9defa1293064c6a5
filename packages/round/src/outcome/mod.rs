use crate::rules::{Payout, BLACKJACK};
use crate::Hand;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result of one player hand against the dealer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandResult {
    Blackjack,
    Win,
    Push,
    Loss,
}

/// Where the dealer's hand ended up.
///
/// `Untouched` means the dealer never played because every player hand was a
/// blackjack; it still carries the real two-card total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerState {
    Untouched { total: u8 },
    Stood { total: u8 },
    Bust { total: u8 },
}

impl DealerState {
    /// State after the dealer policy has run on `hand`.
    pub fn played(hand: &Hand) -> Self {
        let total = hand.value();
        if total > BLACKJACK {
            DealerState::Bust { total }
        } else {
            DealerState::Stood { total }
        }
    }

    pub fn untouched(hand: &Hand) -> Self {
        DealerState::Untouched {
            total: hand.value(),
        }
    }

    pub fn total(&self) -> u8 {
        match *self {
            DealerState::Untouched { total }
            | DealerState::Stood { total }
            | DealerState::Bust { total } => total,
        }
    }

    pub fn is_bust(&self) -> bool {
        matches!(self, DealerState::Bust { .. })
    }
}

/// Terminal state of one player hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    pub total: u8,
    pub blackjack: bool,
}

impl PlayerHand {
    pub fn new(total: u8, blackjack: bool) -> Self {
        Self { total, blackjack }
    }

    pub fn from_hand(hand: &Hand) -> Self {
        Self {
            total: hand.value(),
            blackjack: hand.is_blackjack(),
        }
    }

    pub fn is_busted(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// How the round was played, with the terminal hand(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Play {
    Single(PlayerHand),
    Doubled(PlayerHand),
    Split(PlayerHand, PlayerHand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    NaturalBlackjack,
    Win,
    Push,
    Loss,
    DoubleWin,
    DoubleLoss,
    DoublePush,
    SplitBothPush,
    SplitPushLoss,
    SplitPushWin,
    SplitWinLoss,
    SplitBothLoss,
    SplitBothWin,
    SplitBothBlackjack,
    SplitBlackjackLoss,
    SplitBlackjackPush,
    SplitBlackjackWin,
}

impl RoundOutcome {
    pub const ALL: [RoundOutcome; 17] = [
        RoundOutcome::NaturalBlackjack,
        RoundOutcome::Win,
        RoundOutcome::Push,
        RoundOutcome::Loss,
        RoundOutcome::DoubleWin,
        RoundOutcome::DoubleLoss,
        RoundOutcome::DoublePush,
        RoundOutcome::SplitBothPush,
        RoundOutcome::SplitPushLoss,
        RoundOutcome::SplitPushWin,
        RoundOutcome::SplitWinLoss,
        RoundOutcome::SplitBothLoss,
        RoundOutcome::SplitBothWin,
        RoundOutcome::SplitBothBlackjack,
        RoundOutcome::SplitBlackjackLoss,
        RoundOutcome::SplitBlackjackPush,
        RoundOutcome::SplitBlackjackWin,
    ];

    /// Net wallet change per unit of the original bet
    pub fn payout(&self) -> Payout {
        match self {
            RoundOutcome::NaturalBlackjack => Payout::HALF,
            RoundOutcome::Win => Payout::WIN,
            RoundOutcome::Push => Payout::EVEN,
            RoundOutcome::Loss => Payout::LOSS,
            RoundOutcome::DoubleWin => Payout::DOUBLE_WIN,
            RoundOutcome::DoubleLoss => Payout::DOUBLE_LOSS,
            RoundOutcome::DoublePush => Payout::EVEN,
            RoundOutcome::SplitBothPush => Payout::EVEN,
            RoundOutcome::SplitPushLoss => Payout::LOSE_HALF,
            RoundOutcome::SplitPushWin => Payout::HALF,
            RoundOutcome::SplitWinLoss => Payout::EVEN,
            RoundOutcome::SplitBothLoss => Payout::LOSS,
            RoundOutcome::SplitBothWin => Payout::WIN,
            RoundOutcome::SplitBothBlackjack => Payout::HALF,
            RoundOutcome::SplitBlackjackLoss => Payout::LOSE_QUARTER,
            RoundOutcome::SplitBlackjackPush => Payout::QUARTER,
            RoundOutcome::SplitBlackjackWin => Payout::THREE_QUARTERS,
        }
    }

    /// Odds quoted to the player, as printed on the table
    pub fn odds(&self) -> &'static str {
        match self {
            RoundOutcome::NaturalBlackjack
            | RoundOutcome::SplitPushWin
            | RoundOutcome::SplitBothBlackjack => "3:2",
            RoundOutcome::Win | RoundOutcome::SplitBothWin => "2:1",
            RoundOutcome::DoubleWin => "3:1",
            RoundOutcome::SplitPushLoss => "1:2",
            RoundOutcome::SplitBlackjackLoss => "3:4",
            RoundOutcome::SplitBlackjackPush => "5:4",
            RoundOutcome::SplitBlackjackWin => "7:4",
            RoundOutcome::Push
            | RoundOutcome::DoublePush
            | RoundOutcome::SplitBothPush
            | RoundOutcome::SplitWinLoss => "returned",
            RoundOutcome::Loss | RoundOutcome::DoubleLoss | RoundOutcome::SplitBothLoss => "lost",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RoundOutcome::NaturalBlackjack => "You got blackjack!",
            RoundOutcome::Win => "You win!",
            RoundOutcome::Push => "You pushed.",
            RoundOutcome::Loss => "You lost.",
            RoundOutcome::DoubleWin => "You won on a double down.",
            RoundOutcome::DoubleLoss => "You lost on a double down.",
            RoundOutcome::DoublePush => "You pushed on a double down.",
            RoundOutcome::SplitBothPush => "Both hands pushed.",
            RoundOutcome::SplitPushLoss => "One hand pushed and the other lost.",
            RoundOutcome::SplitPushWin => "One hand pushed and the other won.",
            RoundOutcome::SplitWinLoss => "One hand won and the other lost.",
            RoundOutcome::SplitBothLoss => "Both hands lost.",
            RoundOutcome::SplitBothWin => "Both hands won!",
            RoundOutcome::SplitBothBlackjack => "Both hands got blackjack!",
            RoundOutcome::SplitBlackjackLoss => "One hand got blackjack and the other lost.",
            RoundOutcome::SplitBlackjackPush => "One hand got blackjack and the other pushed.",
            RoundOutcome::SplitBlackjackWin => "One hand got blackjack and the other won.",
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(
            self,
            RoundOutcome::SplitBothPush
                | RoundOutcome::SplitPushLoss
                | RoundOutcome::SplitPushWin
                | RoundOutcome::SplitWinLoss
                | RoundOutcome::SplitBothLoss
                | RoundOutcome::SplitBothWin
                | RoundOutcome::SplitBothBlackjack
                | RoundOutcome::SplitBlackjackLoss
                | RoundOutcome::SplitBlackjackPush
                | RoundOutcome::SplitBlackjackWin
        )
    }

    pub fn is_double(&self) -> bool {
        matches!(
            self,
            RoundOutcome::DoubleWin | RoundOutcome::DoubleLoss | RoundOutcome::DoublePush
        )
    }
}

/// Compare one terminal player hand against the dealer.
///
/// Blackjack beats everything, a player bust loses even to a dealer bust,
/// and a dealer bust loses to any standing player total.
pub fn compare(hand: &PlayerHand, dealer: &DealerState) -> HandResult {
    if hand.blackjack {
        return HandResult::Blackjack;
    }
    if hand.is_busted() {
        return HandResult::Loss;
    }
    if dealer.is_bust() {
        return HandResult::Win;
    }
    match hand.total.cmp(&dealer.total()) {
        Ordering::Greater => HandResult::Win,
        Ordering::Equal => HandResult::Push,
        Ordering::Less => HandResult::Loss,
    }
}

/// Combine two split-hand results. Order does not matter.
pub fn combine_split(first: HandResult, second: HandResult) -> RoundOutcome {
    use HandResult::*;

    match (first, second) {
        (Blackjack, Blackjack) => RoundOutcome::SplitBothBlackjack,
        (Blackjack, Win) | (Win, Blackjack) => RoundOutcome::SplitBlackjackWin,
        (Blackjack, Push) | (Push, Blackjack) => RoundOutcome::SplitBlackjackPush,
        (Blackjack, Loss) | (Loss, Blackjack) => RoundOutcome::SplitBlackjackLoss,
        (Win, Win) => RoundOutcome::SplitBothWin,
        (Win, Push) | (Push, Win) => RoundOutcome::SplitPushWin,
        (Win, Loss) | (Loss, Win) => RoundOutcome::SplitWinLoss,
        (Push, Push) => RoundOutcome::SplitBothPush,
        (Push, Loss) | (Loss, Push) => RoundOutcome::SplitPushLoss,
        (Loss, Loss) => RoundOutcome::SplitBothLoss,
    }
}

/// Resolve the round into its canonical outcome.
pub fn resolve(play: &Play, dealer: &DealerState) -> RoundOutcome {
    match play {
        Play::Single(hand) => match compare(hand, dealer) {
            HandResult::Blackjack => RoundOutcome::NaturalBlackjack,
            HandResult::Win => RoundOutcome::Win,
            HandResult::Push => RoundOutcome::Push,
            HandResult::Loss => RoundOutcome::Loss,
        },
        // A doubled hand has three cards, so it is never a blackjack
        Play::Doubled(hand) => match compare(&PlayerHand::new(hand.total, false), dealer) {
            HandResult::Win | HandResult::Blackjack => RoundOutcome::DoubleWin,
            HandResult::Push => RoundOutcome::DoublePush,
            HandResult::Loss => RoundOutcome::DoubleLoss,
        },
        Play::Split(first, second) => {
            combine_split(compare(first, dealer), compare(second, dealer))
        }
    }
}

#[cfg(test)]
mod tests;
