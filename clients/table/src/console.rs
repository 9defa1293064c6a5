use crate::render::{move_prompt, Labels};
use crate::session::{format_amount, parse_amount, Session};
use blackjack_round::{Error, Move, MoveRequest, MoveSource, RoundReport, BLACKJACK};
use std::io::{self, BufRead, Write};

/// Line-oriented terminal for one player.
pub struct Console<R, W> {
    input: R,
    output: W,
    labels: Labels,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, labels: Labels) -> Self {
        Self {
            input,
            output,
            labels,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prompt and read one line. `None` once the input is closed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until a bet the wallet can cover comes in.
    pub fn ask_bet(&mut self, session: &Session) -> io::Result<Option<u128>> {
        let mut prompt = "Place your bet. $";
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_amount(&line).and_then(|bet| session.validate_bet(bet).map(|_| bet)) {
                Ok(bet) => return Ok(Some(bet)),
                Err(e) => {
                    self.say(&e.to_string())?;
                    prompt = "What's your bet? $";
                }
            }
        }
    }

    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        match self.ask("Do you want to play again? (Y/N) ")? {
            Some(answer) => Ok(!answer.eq_ignore_ascii_case("n")),
            None => Ok(false),
        }
    }

    pub fn show_report(&mut self, report: &RoundReport) -> io::Result<()> {
        self.say("")?;
        for hand in &report.player_hands {
            let total = hand.value();
            let line = if total <= BLACKJACK {
                format!("{} scoring {total}", self.labels.player_hand(hand))
            } else {
                format!("{} busts.", self.labels.player_hand(hand))
            };
            self.say(&line)?;
        }

        let dealer = self.labels.dealer_hand(&report.dealer_hand.cards);
        let line = if report.dealer.is_bust() {
            format!("{dealer} busts.")
        } else {
            format!("{dealer} scoring {}", report.dealer.total())
        };
        self.say(&line)
    }

    pub fn show_wallet(&mut self, session: &Session) -> io::Result<()> {
        self.say(&format!("You have {}", format_amount(session.wallet())))
    }

    fn prompt_move(&mut self, request: &MoveRequest<'_>) -> io::Result<Option<Move>> {
        let labels = self.labels;
        self.say(&labels.dealer_showing(&request.dealer_up_card))?;
        match request.hands {
            [first, second] => {
                self.say(&labels.split_hands(first, second))?;
                self.say(&format!(
                    "Hand {} total is {}",
                    request.hand_index + 1,
                    request.hand.value()
                ))?;
            }
            _ => {
                self.say(&labels.player_hand(request.hand))?;
                self.say(&format!("Your current total is {}", request.hand.value()))?;
            }
        }

        let hand_number = request.split.then_some(request.hand_index + 1);
        let prompt = move_prompt(request.legal, hand_number);
        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match line.parse::<Move>() {
                Ok(mv) if request.allows(mv) => return Ok(Some(mv)),
                Ok(mv) => log::debug!("{mv:?} is not allowed here"),
                Err(e) => log::debug!("{e}"),
            }
            let symbols: Vec<&str> = request.legal.iter().map(|m| m.symbol()).collect();
            self.say(&format!("Please enter one of: {}", symbols.join(", ")))?;
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn choose(&mut self, request: &MoveRequest<'_>) -> Result<Move, Error> {
        match self.prompt_move(request) {
            Ok(Some(mv)) => Ok(mv),
            Ok(None) => Err(Error::MovesExhausted),
            Err(e) => Err(Error::MoveSource(e.to_string())),
        }
    }
}
