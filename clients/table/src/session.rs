//! Wallet bookkeeping across rounds. Amounts are integer cents.

use blackjack_round::RoundOutcome;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("Your bet must be more than $0.00")]
    ZeroBet,
    #[error("You don't have enough money for that bet")]
    InsufficientFunds { bet: u128, wallet: u128 },
}

/// Parse a dollar amount such as `5`, `5.5`, `$5.25` into cents.
pub fn parse_amount(input: &str) -> Result<u128, SessionError> {
    let invalid = || SessionError::InvalidAmount(input.trim().to_string());
    let s = input.trim();
    let s = s.strip_prefix('$').unwrap_or(s);

    let (dollars, cents) = match s.split_once('.') {
        Some((d, c)) => (d, c),
        None => (s, ""),
    };
    if (dollars.is_empty() && cents.is_empty()) || cents.len() > 2 {
        return Err(invalid());
    }
    let digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if !digits(dollars) || !digits(cents) {
        return Err(invalid());
    }

    let dollars: u128 = if dollars.is_empty() {
        0
    } else {
        dollars.parse().map_err(|_| invalid())?
    };
    let cents: u128 = match cents.len() {
        0 => 0,
        1 => cents.parse::<u128>().map_err(|_| invalid())? * 10,
        _ => cents.parse().map_err(|_| invalid())?,
    };
    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(invalid)
}

pub fn format_amount(cents: u128) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn format_signed(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "+" };
    format!("{sign}{}", format_amount(cents.unsigned_abs()))
}

/// A bet that has been taken from the wallet and not yet settled
#[derive(Debug, PartialEq, Eq)]
pub struct Wager {
    bet: u128,
}

impl Wager {
    pub fn bet(&self) -> u128 {
        self.bet
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    wallet: u128,
    rounds_played: u32,
}

impl Session {
    pub fn new(wallet: u128) -> Self {
        Self {
            wallet,
            rounds_played: 0,
        }
    }

    pub fn wallet(&self) -> u128 {
        self.wallet
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_broke(&self) -> bool {
        self.wallet == 0
    }

    pub fn validate_bet(&self, bet: u128) -> Result<(), SessionError> {
        if bet == 0 {
            return Err(SessionError::ZeroBet);
        }
        if bet > self.wallet {
            return Err(SessionError::InsufficientFunds {
                bet,
                wallet: self.wallet,
            });
        }
        Ok(())
    }

    /// Take the stake out of the wallet.
    pub fn place_bet(&mut self, bet: u128) -> Result<Wager, SessionError> {
        self.validate_bet(bet)?;
        self.wallet -= bet;
        log::debug!("Bet {} placed, {} left", format_amount(bet), format_amount(self.wallet));
        Ok(Wager { bet })
    }

    /// Doubling needs a second stake's worth left in the wallet.
    pub fn can_double(&self, wager: &Wager) -> bool {
        self.wallet >= wager.bet
    }

    /// Settle a finished round and return the net change against the
    /// wallet before the bet was placed.
    pub fn settle(&mut self, wager: Wager, outcome: RoundOutcome) -> i128 {
        let credit = outcome.payout().calculate_return(wager.bet);
        let wallet = i128::try_from(self.wallet).unwrap_or(i128::MAX);
        self.wallet = u128::try_from(wallet.saturating_add(credit)).unwrap_or(0);
        self.rounds_played += 1;
        log::info!(
            "Round {} settled as {:?}, wallet {}",
            self.rounds_played,
            outcome,
            format_amount(self.wallet)
        );
        outcome.payout().calculate_net(wager.bet)
    }

    /// Return the stake of a round that never finished.
    pub fn cancel(&mut self, wager: Wager) {
        self.wallet += wager.bet;
    }
}
