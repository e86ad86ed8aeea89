use crate::bot::{BidThresholds, BidderKind, CoinFlipBidder, FirstLegalPlayer, ThresholdBidder};
use tarock_core::game::deal::{DealError, play_deal, simulate_deal};
use tarock_core::game::outcome::DealOutcome;
use tarock_core::model::deck::Deck;
use tarock_core::rng::Randomness;
use tarock_core::strategy::{BidStrategy, PlayStrategy};

/// The bid and play strategies shared by all three seats.
pub struct Policy {
    kind: BidderKind,
    bidder: Box<dyn BidStrategy + Send>,
    player: Box<dyn PlayStrategy + Send>,
}

impl Policy {
    /// Builds the shipped bidder of the given kind alongside the first-legal player.
    pub fn new(kind: BidderKind, thresholds: BidThresholds) -> Self {
        let bidder: Box<dyn BidStrategy + Send> = match kind {
            BidderKind::Threshold => Box::new(ThresholdBidder::new(thresholds)),
            BidderKind::CoinFlip => Box::new(CoinFlipBidder),
        };
        Self {
            kind,
            bidder,
            player: Box::new(FirstLegalPlayer),
        }
    }

    pub fn with_strategies(
        kind: BidderKind,
        bidder: Box<dyn BidStrategy + Send>,
        player: Box<dyn PlayStrategy + Send>,
    ) -> Self {
        Self {
            kind,
            bidder,
            player,
        }
    }

    pub fn kind(&self) -> BidderKind {
        self.kind
    }

    pub fn play(
        &mut self,
        deck: &Deck,
        rng: &mut dyn Randomness,
    ) -> Result<DealOutcome, DealError> {
        play_deal(deck, self.bidder.as_mut(), self.player.as_mut(), rng)
    }

    pub fn simulate(&mut self, rng: &mut dyn Randomness) -> Result<DealOutcome, DealError> {
        simulate_deal(self.bidder.as_mut(), self.player.as_mut(), rng)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(BidderKind::default(), BidThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::Policy;
    use crate::bot::{BidThresholds, BidderKind};

    #[test]
    fn default_policy_uses_threshold_bidder() {
        assert_eq!(Policy::default().kind(), BidderKind::Threshold);
        let policy = Policy::new(BidderKind::CoinFlip, BidThresholds::default());
        assert_eq!(policy.kind(), BidderKind::CoinFlip);
    }
}
