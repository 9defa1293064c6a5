use crate::rules::BLACKJACK;
use crate::Card;
use serde::{Deserialize, Serialize};

/// Calculate the value of a blackjack hand.
///
/// Aces count 11. When the total runs past 21 a single Ace drops to 1,
/// no matter how many Aces the hand holds.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let total = corrected_total(cards);
    u8::try_from(total).unwrap_or(u8::MAX)
}

fn raw_total(cards: &[Card]) -> u16 {
    cards.iter().map(|c| u16::from(c.value())).sum()
}

fn corrected_total(cards: &[Card]) -> u16 {
    let total = raw_total(cards);
    if total > u16::from(BLACKJACK) && cards.iter().any(|c| c.is_ace()) {
        total - 10
    } else {
        total
    }
}

/// Check if a hand is soft (has an ace counted as 11)
///
/// Only one Ace ever drops to 1, so with two or more Aces one of them
/// still counts 11 after the correction.
pub fn is_soft_hand(cards: &[Card]) -> bool {
    let aces = cards.iter().filter(|c| c.is_ace()).count();
    let total = raw_total(cards);
    match aces {
        0 => false,
        1 => total <= u16::from(BLACKJACK),
        _ => corrected_total(cards) <= u16::from(BLACKJACK),
    }
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == BLACKJACK
}

/// Check if two cards can be split (same rank)
pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.rank() == card2.rank()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub doubled: bool,
    pub stood: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Stood, busted or blackjack: no more moves for this hand.
    pub fn is_finished(&self) -> bool {
        self.stood || self.is_busted() || self.is_blackjack()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(&self.cards[0], &self.cards[1])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ranks: &[i32]) -> Vec<Card> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, &r)| Card::new(r, i as i32 % 4))
            .collect()
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&cards(&[2, 3])), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&cards(&[13, 12])), 20);
    }

    #[test]
    fn test_calculate_hand_value_soft_ace() {
        assert_eq!(calculate_hand_value(&cards(&[1, 9])), 20);
    }

    #[test]
    fn test_calculate_hand_value_pair_of_aces() {
        assert_eq!(calculate_hand_value(&cards(&[1, 1])), 12);
    }

    #[test]
    fn test_calculate_hand_value_two_aces_and_nine() {
        assert_eq!(calculate_hand_value(&cards(&[1, 1, 9])), 21);
    }

    #[test]
    fn test_calculate_hand_value_ace_after_faces() {
        assert_eq!(calculate_hand_value(&cards(&[13, 12, 1])), 21);
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        assert_eq!(calculate_hand_value(&cards(&[1, 6, 9])), 16);
    }

    #[test]
    fn test_only_one_ace_is_reduced() {
        // 11 + 11 + 11 = 33, one correction leaves 23
        assert_eq!(calculate_hand_value(&cards(&[1, 1, 1])), 23);
    }

    #[test]
    fn test_calculate_hand_value_empty() {
        assert_eq!(calculate_hand_value(&[]), 0);
    }

    #[test]
    fn test_is_busted() {
        assert!(is_busted(&cards(&[13, 12, 5])));
        assert!(!is_busted(&cards(&[13, 12])));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&cards(&[1, 13])));
        assert!(is_blackjack(&cards(&[10, 1])));
        assert!(!is_blackjack(&cards(&[7, 7, 7])));
        assert!(!is_blackjack(&cards(&[13, 12])));
    }

    #[test]
    fn test_is_soft_hand() {
        assert!(is_soft_hand(&cards(&[1, 6])));
        assert!(!is_soft_hand(&cards(&[1, 6, 9])));
        assert!(!is_soft_hand(&cards(&[13, 12])));
    }

    #[test]
    fn test_is_soft_hand_multiple_aces() {
        // One Ace drops to 1, the other still counts 11
        assert!(is_soft_hand(&cards(&[1, 1])));
        assert!(is_soft_hand(&cards(&[1, 1, 6])));
        assert_eq!(calculate_hand_value(&cards(&[1, 1, 6])), 18);
        assert!(is_soft_hand(&cards(&[1, 1, 9])));
        // 23 after the correction, no Ace left at 11 that helps
        assert!(!is_soft_hand(&cards(&[1, 1, 1])));
        assert!(!is_soft_hand(&cards(&[1, 1, 13])));
    }

    #[test]
    fn test_huge_hand_does_not_overflow() {
        // Every 8 through King plus all four Aces: 294 before the correction
        let hand: Vec<Card> = (8..=13)
            .chain(std::iter::once(1))
            .flat_map(|rank| (0..4).map(move |suit| Card::new(rank, suit)))
            .collect();
        assert_eq!(hand.len(), 28);
        assert_eq!(calculate_hand_value(&hand), u8::MAX);
        assert!(is_busted(&hand));
        assert!(!is_soft_hand(&hand));
    }

    #[test]
    fn test_can_split_cards() {
        assert!(can_split_cards(&Card::new(8, 0), &Card::new(8, 3)));
        assert!(!can_split_cards(&Card::new(8, 0), &Card::new(9, 3)));
        // Equal value is not enough
        assert!(!can_split_cards(&Card::new(13, 0), &Card::new(12, 3)));
    }

    #[test]
    fn test_hand_struct() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(8, 0));
        hand.add_card(Card::new(8, 1));
        assert_eq!(hand.value(), 16);
        assert!(hand.can_split());
        assert!(!hand.is_finished());

        hand.add_card(Card::new(2, 2));
        assert!(!hand.can_split());

        hand.add_card(Card::new(13, 2));
        assert!(hand.is_busted());
        assert!(hand.is_finished());
    }

    #[test]
    fn test_hand_blackjack_is_finished() {
        let hand = Hand::from_cards(&[Card::new(1, 0), Card::new(12, 1)]);
        assert!(hand.is_blackjack());
        assert!(hand.is_finished());
    }
}
