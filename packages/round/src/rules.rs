use crate::Error;
use serde::{Deserialize, Serialize};

/// Best possible total.
pub const BLACKJACK: u8 = 21;

/// Dealer stands once the hand reaches this total.
pub const DEALER_STANDS_ON: u8 = 18;

pub fn dealer_should_hit(total: u8) -> bool {
    total < DEALER_STANDS_ON
}

/// Net change to the wallet per unit of the original bet, as a ratio.
///
/// Positive values are winnings on top of the returned stake, negative
/// values are losses. A doubled loss is `-2/1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub numerator: i16,
    pub denominator: u16,
}

impl Payout {
    pub const EVEN: Self = Self::raw(0, 1);
    pub const WIN: Self = Self::raw(1, 1);
    pub const LOSS: Self = Self::raw(-1, 1);
    pub const HALF: Self = Self::raw(1, 2);
    pub const LOSE_HALF: Self = Self::raw(-1, 2);
    pub const QUARTER: Self = Self::raw(1, 4);
    pub const LOSE_QUARTER: Self = Self::raw(-1, 4);
    pub const THREE_QUARTERS: Self = Self::raw(3, 4);
    pub const DOUBLE_WIN: Self = Self::raw(2, 1);
    pub const DOUBLE_LOSS: Self = Self::raw(-2, 1);

    const fn raw(numerator: i16, denominator: u16) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn new(numerator: i16, denominator: u16) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::InvalidPayout("Denominator cannot be zero"));
        }
        Ok(Self::raw(numerator, denominator))
    }

    /// Net wallet change for `bet`. Fractions truncate toward zero.
    pub fn calculate_net(&self, bet: u128) -> i128 {
        let bet = i128::try_from(bet).unwrap_or(i128::MAX);
        bet.saturating_mul(self.numerator as i128) / self.denominator as i128
    }

    /// Amount credited back after the stake was taken: stake plus net.
    pub fn calculate_return(&self, bet: u128) -> i128 {
        i128::try_from(bet)
            .unwrap_or(i128::MAX)
            .saturating_add(self.calculate_net(bet))
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dealer_should_hit() {
        assert!(dealer_should_hit(12));
        assert!(dealer_should_hit(17));
        assert!(!dealer_should_hit(18));
        assert!(!dealer_should_hit(23));
    }

    #[test]
    fn test_payout_win() {
        assert_eq!(Payout::WIN.calculate_net(100), 100);
        assert_eq!(Payout::WIN.calculate_return(100), 200);
    }

    #[test]
    fn test_payout_half() {
        assert_eq!(Payout::HALF.calculate_net(100), 50);
        assert_eq!(Payout::HALF.calculate_return(100), 150);
        assert_eq!(Payout::LOSE_HALF.calculate_return(100), 50);
    }

    #[test]
    fn test_payout_quarters() {
        assert_eq!(Payout::LOSE_QUARTER.calculate_return(100), 75);
        assert_eq!(Payout::QUARTER.calculate_return(100), 125);
        assert_eq!(Payout::THREE_QUARTERS.calculate_return(100), 175);
    }

    #[test]
    fn test_payout_double() {
        assert_eq!(Payout::DOUBLE_WIN.calculate_net(50), 100);
        assert_eq!(Payout::DOUBLE_LOSS.calculate_net(50), -100);
        assert_eq!(Payout::DOUBLE_LOSS.calculate_return(50), -50);
    }

    #[test]
    fn test_payout_truncates_toward_zero() {
        assert_eq!(Payout::QUARTER.calculate_net(3), 0);
        assert_eq!(Payout::LOSE_QUARTER.calculate_net(3), 0);
        assert_eq!(Payout::HALF.calculate_net(5), 2);
    }

    #[test]
    fn test_payout_custom() {
        let payout = Payout::new(7, 4).unwrap();
        assert_eq!(payout.calculate_net(400), 700);
    }

    #[test]
    fn test_payout_zero_denominator() {
        assert!(Payout::new(3, 0).is_err());
    }
}
