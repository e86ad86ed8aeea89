use rand::SeedableRng;
use rand::rngs::StdRng;
use tarock_bot::Policy;
use tarock_core::game::deal::DealError;
use tarock_core::game::outcome::DealOutcome;
use tarock_core::model::deck::Deck;
use tracing::info;

use crate::config::{SimulationConfig, ValidationError};

/// Plays a single deal according to a validated configuration.
pub struct DealRunner {
    seed: u64,
    policy: Policy,
}

impl DealRunner {
    /// Picks a fresh seed from system entropy when the config has none.
    pub fn new(config: &SimulationConfig) -> Result<Self, ValidationError> {
        let kind = config.strategy.bidder_kind()?;
        let thresholds = config.strategy.resolved_thresholds();
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            seed,
            policy: Policy::new(kind, thresholds),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn run(mut self) -> Result<DealOutcome, DealError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let deck = Deck::shuffled(&mut rng);
        info!(
            target: "tarock::sim",
            seed = self.seed,
            bidder = %self.policy.kind(),
            "dealing"
        );
        self.policy.play(&deck, &mut rng)
    }
}
