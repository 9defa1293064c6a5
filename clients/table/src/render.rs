use blackjack_round::{Card, Hand, Move};

/// How cards are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Labels {
    /// `[Ace of Hearts]`
    #[default]
    Long,
    /// `[A-H]`
    Short,
}

impl Labels {
    pub fn card(&self, card: &Card) -> String {
        match self {
            Labels::Long => format!("[{}]", card.long_label()),
            Labels::Short => format!("[{}]", card.short_label()),
        }
    }

    pub fn cards(&self, cards: &[Card]) -> String {
        cards.iter().map(|c| self.card(c)).collect()
    }

    pub fn player_hand(&self, hand: &Hand) -> String {
        format!("Your Hand: {}", self.cards(&hand.cards))
    }

    pub fn split_hands(&self, first: &Hand, second: &Hand) -> String {
        format!(
            "Your hands: \n1: {}\n2: {}",
            self.cards(&first.cards),
            self.cards(&second.cards)
        )
    }

    pub fn dealer_hand(&self, cards: &[Card]) -> String {
        format!("Dealer's Hand: {}", self.cards(cards))
    }

    /// The dealer's hand while the hole card is still face down.
    pub fn dealer_showing(&self, up_card: &Card) -> String {
        format!("Dealer's Hand: []{}", self.card(up_card))
    }
}

/// `Do you want to (h)it, (s)tand, or (d)ouble down? `
pub fn move_prompt(legal: &[Move], hand_number: Option<usize>) -> String {
    let labels: Vec<&str> = legal.iter().map(|m| m.label()).collect();
    let choices = match labels.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    };
    match hand_number {
        Some(n) => format!("Hand {n}: Do you want to {choices}? "),
        None => format!("Do you want to {choices}? "),
    }
}
