use crate::deck::Deck;
use crate::outcome::{resolve, DealerState, Play, PlayerHand, RoundOutcome};
use crate::rules::dealer_should_hit;
use crate::{Card, Error, Hand, Move, MoveRequest, MoveSource};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Opening cards are out and the first decision is pending
    Dealt,
    PlayerTurn { hand: usize },
    DealerTurn,
    Resolved,
}

/// Final picture of a round, handed to settlement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub player_hands: Vec<Hand>,
    pub dealer_hand: Hand,
    pub dealer: DealerState,
    pub outcome: RoundOutcome,
}

/// One round of play: one player hand, or two after a split, against the dealer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    player_hands: Vec<Hand>,
    dealer_hand: Hand,
    dealer_up_card: Card,
    dealer: DealerState,
    phase: RoundPhase,
    can_double: bool,
}

impl Round {
    /// Deal the opening cards. A natural blackjack resolves the round on the spot.
    pub fn deal<R: Rng + ?Sized>(deck: &mut Deck<'_, R>, can_double: bool) -> Self {
        let mut player = Hand::new();
        let mut dealer_hand = Hand::new();
        for _ in 0..2 {
            player.add_card(deck.deal());
            dealer_hand.add_card(deck.deal());
        }
        // The first dealer card stays face down
        let dealer_up_card = dealer_hand.cards[1];

        let phase = if player.is_blackjack() {
            log::debug!("Natural blackjack, round resolved without a move");
            RoundPhase::Resolved
        } else {
            RoundPhase::Dealt
        };

        Self {
            dealer: DealerState::untouched(&dealer_hand),
            player_hands: vec![player],
            dealer_hand,
            dealer_up_card,
            phase,
            can_double,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn dealer_up_card(&self) -> Card {
        self.dealer_up_card
    }

    pub fn dealer_state(&self) -> DealerState {
        self.dealer
    }

    pub fn is_split(&self) -> bool {
        self.player_hands.len() > 1
    }

    pub fn is_doubled(&self) -> bool {
        self.player_hands.iter().any(|h| h.doubled)
    }

    /// Hand waiting for a decision, if any
    pub fn active_hand_index(&self) -> Option<usize> {
        match self.phase {
            RoundPhase::Dealt => Some(0),
            RoundPhase::PlayerTurn { hand } => Some(hand),
            RoundPhase::DealerTurn | RoundPhase::Resolved => None,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            RoundPhase::Dealt => {
                let mut moves = vec![Move::Hit, Move::Stand];
                if self.can_double {
                    moves.push(Move::Double);
                }
                if self.player_hands[0].can_split() {
                    moves.push(Move::Split);
                }
                moves
            }
            RoundPhase::PlayerTurn { .. } => vec![Move::Hit, Move::Stand],
            RoundPhase::DealerTurn | RoundPhase::Resolved => Vec::new(),
        }
    }

    /// How the round was played so far
    pub fn play(&self) -> Play {
        match self.player_hands.as_slice() {
            [first, second, ..] => {
                Play::Split(PlayerHand::from_hand(first), PlayerHand::from_hand(second))
            }
            [hand] if hand.doubled => Play::Doubled(PlayerHand::from_hand(hand)),
            [hand] => Play::Single(PlayerHand::from_hand(hand)),
            [] => Play::Single(PlayerHand::new(0, false)),
        }
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Resolved => Some(resolve(&self.play(), &self.dealer)),
            _ => None,
        }
    }

    /// Apply one player decision. Illegal moves leave the round untouched.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        mv: Move,
        deck: &mut Deck<'_, R>,
    ) -> Result<(), Error> {
        let index = match self.active_hand_index() {
            Some(index) if self.legal_moves().contains(&mv) => index,
            _ => {
                return Err(Error::IllegalMove {
                    mv,
                    phase: self.phase,
                })
            }
        };

        match mv {
            Move::Hit => {
                let card = deck.deal();
                let hand = &mut self.player_hands[index];
                hand.add_card(card);
                log::debug!(
                    "Hand {} hits {}, total {}",
                    index + 1,
                    card.short_label(),
                    hand.value()
                );
                if hand.is_busted() {
                    log::debug!("Hand {} busts", index + 1);
                }
            }
            Move::Stand => {
                self.player_hands[index].stood = true;
            }
            Move::Double => {
                let card = deck.deal();
                let hand = &mut self.player_hands[index];
                hand.doubled = true;
                hand.add_card(card);
                hand.stood = true;
                log::debug!("Doubled down on {}, total {}", card.short_label(), hand.value());
            }
            Move::Split => self.split(deck),
        }

        self.advance(deck);
        Ok(())
    }

    fn split<R: Rng + ?Sized>(&mut self, deck: &mut Deck<'_, R>) {
        let mut second = Hand::new();
        if let Some(card) = self.player_hands[0].cards.pop() {
            second.add_card(card);
        }
        self.player_hands[0].add_card(deck.deal());
        second.add_card(deck.deal());
        self.player_hands.push(second);
        for (i, hand) in self.player_hands.iter().enumerate() {
            if hand.is_blackjack() {
                log::debug!("Hand {} has blackjack", i + 1);
            }
        }
    }

    /// Move to the next hand that still needs decisions, or finish the round.
    fn advance<R: Rng + ?Sized>(&mut self, deck: &mut Deck<'_, R>) {
        if let Some(hand) = self.player_hands.iter().position(|h| !h.is_finished()) {
            self.phase = RoundPhase::PlayerTurn { hand };
            return;
        }

        self.phase = RoundPhase::DealerTurn;
        if self.player_hands.iter().all(|h| h.is_blackjack()) {
            log::debug!("Every hand has blackjack, dealer does not draw");
        } else {
            self.play_dealer(deck);
        }
        self.phase = RoundPhase::Resolved;
    }

    fn play_dealer<R: Rng + ?Sized>(&mut self, deck: &mut Deck<'_, R>) {
        while dealer_should_hit(self.dealer_hand.value()) {
            let card = deck.deal();
            self.dealer_hand.add_card(card);
            log::debug!("Dealer hits {}, total {}", card.short_label(), self.dealer_hand.value());
        }
        self.dealer = DealerState::played(&self.dealer_hand);
        if self.dealer.is_bust() {
            log::debug!("Dealer busts");
        }
    }

    /// Consume a resolved round into its report.
    pub fn into_report(self) -> RoundReport {
        let outcome = resolve(&self.play(), &self.dealer);
        RoundReport {
            player_hands: self.player_hands,
            dealer_hand: self.dealer_hand,
            dealer: self.dealer,
            outcome,
        }
    }
}

/// Play a full round, asking `moves` for every player decision.
///
/// Illegal answers are logged and asked again. The only error is the move
/// source failing to produce a move.
pub fn play_round<R, M>(
    deck: &mut Deck<'_, R>,
    can_double: bool,
    moves: &mut M,
) -> Result<RoundReport, Error>
where
    R: Rng + ?Sized,
    M: MoveSource + ?Sized,
{
    let mut round = Round::deal(deck, can_double);

    while let Some(hand_index) = round.active_hand_index() {
        let legal = round.legal_moves();
        let request = MoveRequest {
            hand_index,
            split: round.is_split(),
            hands: &round.player_hands,
            hand: &round.player_hands[hand_index],
            dealer_up_card: round.dealer_up_card,
            legal: &legal,
        };
        let mv = moves.choose(&request)?;
        match round.apply(mv, deck) {
            Ok(()) => {}
            Err(e @ Error::IllegalMove { .. }) => log::warn!("{e}, asking again"),
            Err(e) => return Err(e),
        }
    }

    let report = round.into_report();
    log::debug!("Round resolved: {:?}", report.outcome);
    Ok(report)
}
