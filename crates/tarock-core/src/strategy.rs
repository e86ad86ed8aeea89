use crate::model::bid::{Bid, Game};
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::player::Player;
use crate::rng::Randomness;

/// What a bidder sees when offered the next rung of the ladder.
#[derive(Debug, Clone, Copy)]
pub struct BidView<'a> {
    pub seat: Player,
    pub hand: &'a Hand,
    pub offered: Bid,
    pub standing: Game,
    pub high_bidder: Option<Player>,
    pub pass_count: u32,
}

/// What a player sees when it is their turn to put a card on the ground.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    pub seat: Player,
    pub hand: &'a Hand,
    pub ground: &'a [Card],
    pub legal: &'a [Card],
    pub game: Game,
    pub declarer: Option<Player>,
}

/// Decides whether to take the offered bid.
pub trait BidStrategy {
    fn accept_bid(&mut self, view: &BidView<'_>, rng: &mut dyn Randomness) -> bool;
}

/// Picks one card out of `view.legal`. `None` means the strategy has nothing to play.
pub trait PlayStrategy {
    fn choose_play(&mut self, view: &PlayView<'_>, rng: &mut dyn Randomness) -> Option<Card>;
}
