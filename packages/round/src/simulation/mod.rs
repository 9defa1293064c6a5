use crate::deck::Deck;
use crate::round::play_round;
use crate::{BasicStrategy, Error, RoundOutcome};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub rounds: u64,
    pub outcomes: BTreeMap<RoundOutcome, u64>,
    /// Average net wallet change per unit bet
    pub expected_return: f64,
    /// Negated expected return
    pub house_edge: f64,
}

impl SimulationResult {
    pub fn count(&self, outcome: RoundOutcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    pub fn frequency(&self, outcome: RoundOutcome) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.rounds as f64
    }
}

/// Monte Carlo estimate of the player's return under basic strategy.
pub struct Simulation {
    rng: ChaCha8Rng,
    can_double: bool,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            can_double: true,
        }
    }

    /// Simulate a bankroll that can never afford to double down.
    pub fn without_double(mut self) -> Self {
        self.can_double = false;
        self
    }

    pub fn run(&mut self, rounds: u64) -> Result<SimulationResult, Error> {
        let mut outcomes = BTreeMap::new();
        let mut net = 0.0;
        let mut strategy = BasicStrategy;

        for _ in 0..rounds {
            let mut deck = Deck::new(&mut self.rng);
            let report = play_round(&mut deck, self.can_double, &mut strategy)?;
            *outcomes.entry(report.outcome).or_insert(0) += 1;
            net += report.outcome.payout().as_f64();
        }

        let expected_return = if rounds == 0 { 0.0 } else { net / rounds as f64 };
        log::debug!("Simulated {rounds} rounds, expected return {expected_return:+.4}");

        Ok(SimulationResult {
            rounds,
            outcomes,
            expected_return,
            house_edge: -expected_return,
        })
    }
}
