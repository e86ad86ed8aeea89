pub mod bot;
pub mod policy;

pub use bot::{
    BidThresholds, BidderKind, CoinFlipBidder, FirstLegalPlayer, ThresholdBidder, UnknownBidder,
};
pub use policy::Policy;
