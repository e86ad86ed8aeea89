mod bid;
mod params;
mod play;
mod random;

pub use bid::{ThresholdBidder, hand_strength};
pub use params::BidThresholds;
pub use play::FirstLegalPlayer;
pub use random::CoinFlipBidder;

use std::fmt;
use std::str::FromStr;

/// Which bid-acceptance strategy seats use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BidderKind {
    #[default]
    Threshold,
    CoinFlip,
}

impl BidderKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BidderKind::Threshold => "threshold",
            BidderKind::CoinFlip => "coin_flip",
        }
    }
}

impl fmt::Display for BidderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBidder(pub String);

impl fmt::Display for UnknownBidder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bidder '{}' (expected threshold or coin_flip)", self.0)
    }
}

impl std::error::Error for UnknownBidder {}

impl FromStr for BidderKind {
    type Err = UnknownBidder;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "threshold" | "heuristic" | "default" => Ok(BidderKind::Threshold),
            "coin_flip" | "coinflip" | "random" => Ok(BidderKind::CoinFlip),
            other => Err(UnknownBidder(other.to_string())),
        }
    }
}
