use crate::Card;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Cards already dealt in the current round, keyed by flattened identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealtSet {
    mask: u64,
}

impl DealtSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.mask & (1u64 << card.index()) != 0
    }

    /// Returns false if the card was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let fresh = !self.contains(&card);
        self.mask |= 1u64 << card.index();
        fresh
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == Card::COUNT as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        (0..Card::COUNT as i32)
            .map(Card::from_index)
            .filter(|c| self.contains(c))
    }
}

/// Draw a uniformly random card that is not in `excluding`.
///
/// The caller records the result; this does not touch the set. The set
/// must not be full.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, excluding: &DealtSet) -> Card {
    debug_assert!(!excluding.is_full(), "deck exhausted");
    loop {
        let card = Card::from_index(rng.gen_range(0..Card::COUNT as i32));
        if !excluding.contains(&card) {
            return card;
        }
    }
}

/// A single 52-card deck for one round.
pub struct Deck<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    dealt: DealtSet,
    preset: VecDeque<Card>,
}

impl<'a, R: Rng + ?Sized> Deck<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            dealt: DealtSet::new(),
            preset: VecDeque::new(),
        }
    }

    /// Deal `cards` in order before falling back to random draws.
    /// Opening deal order is player, dealer, player, dealer.
    pub fn with_preset(rng: &'a mut R, cards: &[Card]) -> Self {
        Self {
            rng,
            dealt: DealtSet::new(),
            preset: cards.iter().copied().collect(),
        }
    }

    pub fn deal(&mut self) -> Card {
        while let Some(card) = self.preset.pop_front() {
            if self.dealt.insert(card) {
                return card;
            }
            log::debug!("Preset card {} already dealt, skipping", card.short_label());
        }
        let card = draw(&mut *self.rng, &self.dealt);
        self.dealt.insert(card);
        card
    }

    pub fn dealt(&self) -> &DealtSet {
        &self.dealt
    }

    pub fn remaining(&self) -> usize {
        Card::COUNT as usize - self.dealt.len()
    }
}
