use super::*;

fn hand(total: u8) -> PlayerHand {
    PlayerHand::new(total, false)
}

fn blackjack() -> PlayerHand {
    PlayerHand::new(21, true)
}

fn stood(total: u8) -> DealerState {
    DealerState::Stood { total }
}

fn bust(total: u8) -> DealerState {
    DealerState::Bust { total }
}

#[test]
fn test_natural_blackjack_ignores_dealer() {
    let play = Play::Single(blackjack());
    assert_eq!(resolve(&play, &stood(21)), RoundOutcome::NaturalBlackjack);
    assert_eq!(resolve(&play, &bust(25)), RoundOutcome::NaturalBlackjack);
    assert_eq!(
        resolve(&play, &DealerState::Untouched { total: 20 }),
        RoundOutcome::NaturalBlackjack
    );
}

#[test]
fn test_player_bust_loses() {
    let play = Play::Single(hand(22));
    assert_eq!(resolve(&play, &stood(18)), RoundOutcome::Loss);
    assert_eq!(resolve(&play, &stood(17)), RoundOutcome::Loss);
}

#[test]
fn test_player_bust_loses_to_dealer_bust() {
    let play = Play::Single(hand(24));
    assert_eq!(resolve(&play, &bust(22)), RoundOutcome::Loss);
}

#[test]
fn test_dealer_bust_pays_standing_hand() {
    assert_eq!(resolve(&Play::Single(hand(12)), &bust(23)), RoundOutcome::Win);
    assert_eq!(resolve(&Play::Single(hand(21)), &bust(26)), RoundOutcome::Win);
}

#[test]
fn test_single_hand_comparisons() {
    assert_eq!(resolve(&Play::Single(hand(20)), &stood(19)), RoundOutcome::Win);
    assert_eq!(resolve(&Play::Single(hand(19)), &stood(19)), RoundOutcome::Push);
    assert_eq!(resolve(&Play::Single(hand(18)), &stood(19)), RoundOutcome::Loss);
}

#[test]
fn test_three_card_twenty_one_is_not_blackjack() {
    assert_eq!(resolve(&Play::Single(hand(21)), &stood(21)), RoundOutcome::Push);
}

#[test]
fn test_untouched_dealer_compares_on_real_total() {
    let dealer = DealerState::Untouched { total: 15 };
    assert_eq!(compare(&hand(16), &dealer), HandResult::Win);
    assert_eq!(compare(&hand(15), &dealer), HandResult::Push);
    assert_eq!(compare(&hand(14), &dealer), HandResult::Loss);
}

#[test]
fn test_double_outcomes() {
    assert_eq!(resolve(&Play::Doubled(hand(20)), &stood(19)), RoundOutcome::DoubleWin);
    assert_eq!(resolve(&Play::Doubled(hand(19)), &stood(19)), RoundOutcome::DoublePush);
    assert_eq!(resolve(&Play::Doubled(hand(18)), &stood(19)), RoundOutcome::DoubleLoss);
    assert_eq!(resolve(&Play::Doubled(hand(13)), &bust(22)), RoundOutcome::DoubleWin);
    assert_eq!(resolve(&Play::Doubled(hand(25)), &bust(22)), RoundOutcome::DoubleLoss);
}

#[test]
fn test_doubled_hand_never_counts_as_blackjack() {
    let play = Play::Doubled(PlayerHand::new(21, true));
    assert_eq!(resolve(&play, &stood(21)), RoundOutcome::DoublePush);
}

#[test]
fn test_combine_split_every_pair() {
    use HandResult::*;

    let cases = [
        (Push, Push, RoundOutcome::SplitBothPush),
        (Push, Loss, RoundOutcome::SplitPushLoss),
        (Push, Win, RoundOutcome::SplitPushWin),
        (Win, Loss, RoundOutcome::SplitWinLoss),
        (Loss, Loss, RoundOutcome::SplitBothLoss),
        (Win, Win, RoundOutcome::SplitBothWin),
        (Blackjack, Blackjack, RoundOutcome::SplitBothBlackjack),
        (Blackjack, Loss, RoundOutcome::SplitBlackjackLoss),
        (Blackjack, Push, RoundOutcome::SplitBlackjackPush),
        (Blackjack, Win, RoundOutcome::SplitBlackjackWin),
    ];
    for (first, second, expected) in cases {
        assert_eq!(combine_split(first, second), expected, "{first:?} + {second:?}");
        assert_eq!(combine_split(second, first), expected, "{second:?} + {first:?}");
    }
}

#[test]
fn test_split_both_lose() {
    // 18 against 19, and a bust
    let play = Play::Split(hand(18), hand(24));
    assert_eq!(resolve(&play, &stood(19)), RoundOutcome::SplitBothLoss);
}

#[test]
fn test_split_dealer_bust() {
    let play = Play::Split(hand(15), hand(19));
    assert_eq!(resolve(&play, &bust(24)), RoundOutcome::SplitBothWin);

    let play = Play::Split(hand(15), hand(23));
    assert_eq!(resolve(&play, &bust(24)), RoundOutcome::SplitWinLoss);
}

#[test]
fn test_split_mixed() {
    assert_eq!(
        resolve(&Play::Split(hand(19), hand(20)), &stood(19)),
        RoundOutcome::SplitPushWin
    );
    assert_eq!(
        resolve(&Play::Split(hand(17), hand(19)), &stood(19)),
        RoundOutcome::SplitPushLoss
    );
    assert_eq!(
        resolve(&Play::Split(hand(19), hand(19)), &stood(19)),
        RoundOutcome::SplitBothPush
    );
}

#[test]
fn test_split_with_blackjack() {
    let dealer = stood(19);
    assert_eq!(
        resolve(&Play::Split(blackjack(), hand(20)), &dealer),
        RoundOutcome::SplitBlackjackWin
    );
    assert_eq!(
        resolve(&Play::Split(hand(19), blackjack()), &dealer),
        RoundOutcome::SplitBlackjackPush
    );
    assert_eq!(
        resolve(&Play::Split(blackjack(), hand(23)), &dealer),
        RoundOutcome::SplitBlackjackLoss
    );
    assert_eq!(
        resolve(&Play::Split(blackjack(), hand(12)), &bust(22)),
        RoundOutcome::SplitBlackjackWin
    );
}

#[test]
fn test_split_double_blackjack_with_untouched_dealer() {
    let play = Play::Split(blackjack(), blackjack());
    let dealer = DealerState::Untouched { total: 20 };
    assert_eq!(resolve(&play, &dealer), RoundOutcome::SplitBothBlackjack);
}

#[test]
fn test_dealer_state_from_hand() {
    use crate::Card;

    let hand = Hand::from_cards(&[Card::new(10, 0), Card::new(9, 1)]);
    assert_eq!(DealerState::played(&hand), stood(19));
    assert_eq!(DealerState::untouched(&hand), DealerState::Untouched { total: 19 });

    let hand = Hand::from_cards(&[Card::new(10, 0), Card::new(6, 1), Card::new(13, 2)]);
    assert_eq!(DealerState::played(&hand), bust(26));
    assert!(DealerState::played(&hand).is_bust());
}

#[test]
fn test_payouts_match_table() {
    let bet = 400;
    let expected_returns = [
        (RoundOutcome::NaturalBlackjack, 600),
        (RoundOutcome::Win, 800),
        (RoundOutcome::Push, 400),
        (RoundOutcome::Loss, 0),
        (RoundOutcome::DoubleWin, 1200),
        (RoundOutcome::DoubleLoss, -400),
        (RoundOutcome::DoublePush, 400),
        (RoundOutcome::SplitBothPush, 400),
        (RoundOutcome::SplitPushLoss, 200),
        (RoundOutcome::SplitPushWin, 600),
        (RoundOutcome::SplitWinLoss, 400),
        (RoundOutcome::SplitBothLoss, 0),
        (RoundOutcome::SplitBothWin, 800),
        (RoundOutcome::SplitBothBlackjack, 600),
        (RoundOutcome::SplitBlackjackLoss, 300),
        (RoundOutcome::SplitBlackjackPush, 500),
        (RoundOutcome::SplitBlackjackWin, 700),
    ];
    assert_eq!(expected_returns.len(), RoundOutcome::ALL.len());
    for (outcome, returned) in expected_returns {
        assert_eq!(outcome.payout().calculate_return(bet), returned, "{outcome:?}");
    }
}

#[test]
fn test_outcome_families() {
    let splits = RoundOutcome::ALL.iter().filter(|o| o.is_split()).count();
    let doubles = RoundOutcome::ALL.iter().filter(|o| o.is_double()).count();
    assert_eq!(splits, 10);
    assert_eq!(doubles, 3);
    assert!(!RoundOutcome::NaturalBlackjack.is_split());
    assert_eq!(RoundOutcome::SplitBlackjackWin.odds(), "7:4");
    assert_eq!(RoundOutcome::DoubleWin.odds(), "3:1");
}
