use super::BidThresholds;
use tarock_core::model::hand::Hand;
use tarock_core::model::rank::Rank;
use tarock_core::rng::Randomness;
use tarock_core::strategy::{BidStrategy, BidView};
use tracing::{Level, event};

/// Trumps above this rank count twice.
const HIGH_TRUMP_FLOOR: u8 = 16;

/// Trumps, plus a second count for trumps above 16, plus kings.
pub fn hand_strength(hand: &Hand) -> u32 {
    hand.iter()
        .map(|card| {
            if card.is_trump() {
                match card.rank {
                    Rank::Number(value) if value > HIGH_TRUMP_FLOOR => 2,
                    _ => 1,
                }
            } else if card.rank == Rank::King {
                1
            } else {
                0
            }
        })
        .sum()
}

/// Accepts a rung when the hand's strength exceeds that rung's threshold.
#[derive(Debug, Clone, Default)]
pub struct ThresholdBidder {
    thresholds: BidThresholds,
}

impl ThresholdBidder {
    pub fn new(thresholds: BidThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> BidThresholds {
        self.thresholds
    }
}

impl BidStrategy for ThresholdBidder {
    fn accept_bid(&mut self, view: &BidView<'_>, _rng: &mut dyn Randomness) -> bool {
        let strength = hand_strength(view.hand);
        let threshold = self.thresholds.for_bid(view.offered);
        let accept = strength > threshold;
        event!(
            target: "tarock_bot::bid",
            Level::DEBUG,
            seat = %view.seat,
            offered = %view.offered,
            strength,
            threshold,
            accept
        );
        accept
    }
}

#[cfg(test)]
mod tests {
    use super::{ThresholdBidder, hand_strength};
    use crate::bot::BidThresholds;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tarock_core::model::bid::{Bid, Game};
    use tarock_core::model::card::Card;
    use tarock_core::model::hand::Hand;
    use tarock_core::model::player::Player;
    use tarock_core::model::rank::Rank;
    use tarock_core::model::suit::Suit;
    use tarock_core::strategy::{BidStrategy, BidView};

    fn view(hand: &Hand, offered: Bid) -> BidView<'_> {
        BidView {
            seat: Player::Middlehand,
            hand,
            offered,
            standing: Game::None,
            high_bidder: None,
            pass_count: 0,
        }
    }

    #[test]
    fn strength_double_counts_high_trumps_and_counts_kings() {
        let hand = Hand::with_cards(vec![
            Card::trump(16),
            Card::trump(17),
            Card::trump(22),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Number(9), Suit::Clubs),
        ]);
        assert_eq!(hand_strength(&hand), 1 + 2 + 2 + 1);
    }

    #[test]
    fn accepts_only_above_threshold() {
        let mut rng = StdRng::seed_from_u64(0);
        let thresholds = BidThresholds {
            small: 3,
            under: 4,
            over: 5,
            solo: 6,
        };
        let mut bidder = ThresholdBidder::new(thresholds);
        // Strength four.
        let hand = Hand::with_cards(vec![Card::trump(21), Card::trump(2), Card::trump(3)]);
        assert!(bidder.accept_bid(&view(&hand, Bid::Small), &mut rng));
        assert!(!bidder.accept_bid(&view(&hand, Bid::Under), &mut rng));
        assert!(!bidder.accept_bid(&view(&hand, Bid::Solo), &mut rng));
    }

    #[test]
    fn empty_hand_never_bids() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut bidder = ThresholdBidder::default();
        let hand = Hand::new();
        assert!(!bidder.accept_bid(&view(&hand, Bid::Small), &mut rng));
    }
}
