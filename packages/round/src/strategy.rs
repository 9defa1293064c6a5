use crate::hand::{calculate_hand_value, can_split_cards, is_soft_hand};
use crate::{Card, Error, Move, MoveRequest, MoveSource};

/// Get the preferred move from a basic strategy chart.
///
/// Double and split are only suggested when the caller says they are allowed.
pub fn optimal_move(
    player_cards: &[Card],
    dealer_up_card: &Card,
    can_double: bool,
    can_split: bool,
) -> Move {
    let player_value = calculate_hand_value(player_cards);
    let dealer_value = dealer_up_card.value();
    let is_soft = is_soft_hand(player_cards);

    if can_split && player_cards.len() == 2 && can_split_cards(&player_cards[0], &player_cards[1]) {
        match player_cards[0].rank() {
            // Always split Aces and 8s
            1 | 8 => return Move::Split,
            9 if !matches!(dealer_value, 7 | 10 | 11) => return Move::Split,
            2 | 3 | 6 | 7 if (2..=7).contains(&dealer_value) => return Move::Split,
            // Never split 10s, 5s, 4s
            _ => {}
        }
    }

    if can_double {
        let double = if is_soft {
            match player_value {
                19 => dealer_value == 6,
                18 => (2..=6).contains(&dealer_value),
                17 => (3..=6).contains(&dealer_value),
                15 | 16 => (4..=6).contains(&dealer_value),
                13 | 14 => (5..=6).contains(&dealer_value),
                _ => false,
            }
        } else {
            match player_value {
                11 => true,
                10 => dealer_value <= 9,
                9 => (3..=6).contains(&dealer_value),
                _ => false,
            }
        };
        if double {
            return Move::Double;
        }
    }

    if is_soft {
        match player_value {
            19.. => Move::Stand,
            18 if dealer_value >= 9 => Move::Hit,
            18 => Move::Stand,
            _ => Move::Hit,
        }
    } else {
        match player_value {
            17.. => Move::Stand,
            13..=16 if (2..=6).contains(&dealer_value) => Move::Stand,
            12 if (4..=6).contains(&dealer_value) => Move::Stand,
            _ => Move::Hit,
        }
    }
}

/// Plays every decision off the basic strategy chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl MoveSource for BasicStrategy {
    fn choose(&mut self, request: &MoveRequest<'_>) -> Result<Move, Error> {
        Ok(optimal_move(
            &request.hand.cards,
            &request.dealer_up_card,
            request.allows(Move::Double),
            request.allows(Move::Split),
        ))
    }
}
