use tarock_core::rng::Randomness;
use tarock_core::strategy::{BidStrategy, BidView};
use tracing::{Level, event};

/// Takes each offered rung on a fair coin flip.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinFlipBidder;

impl BidStrategy for CoinFlipBidder {
    fn accept_bid(&mut self, view: &BidView<'_>, rng: &mut dyn Randomness) -> bool {
        let accept = rng.coin_flip();
        event!(
            target: "tarock_bot::bid",
            Level::DEBUG,
            seat = %view.seat,
            offered = %view.offered,
            accept
        );
        accept
    }
}
