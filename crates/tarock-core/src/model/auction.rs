use crate::model::bid::{Bid, Game};
use crate::model::hand::Hand;
use crate::model::player::Player;
use crate::rng::Randomness;
use crate::strategy::{BidStrategy, BidView};
use std::fmt;
use tracing::debug;

/// Passes after a standing bid that close the auction.
const PASSES_TO_CLOSE: u32 = 2;
/// Passes that void a deal nobody bid on.
const PASSES_TO_VOID: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    LadderExhausted(Game),
    Closed(Game),
}

impl fmt::Display for AuctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionError::LadderExhausted(game) => {
                write!(f, "no bid remains above {game}")
            }
            AuctionError::Closed(game) => write!(f, "auction already closed at {game}"),
        }
    }
}

impl std::error::Error for AuctionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionState {
    game: Game,
    declarer: Option<Player>,
    turn: Player,
    pass_count: u32,
    passes_at_bid: u32,
}

impl Default for AuctionState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuctionState {
    pub const fn new() -> Self {
        Self {
            game: Game::None,
            declarer: None,
            turn: Player::Forehand,
            pass_count: 0,
            passes_at_bid: 0,
        }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn declarer(&self) -> Option<Player> {
        self.declarer
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }

    /// The final contract once no further offers can be made.
    pub fn outcome(&self) -> Option<Game> {
        match self.game {
            Game::Passed => Some(Game::Passed),
            Game::None if self.pass_count >= PASSES_TO_VOID => Some(Game::Passed),
            Game::None => None,
            Game::Bid(bid) if bid.next().is_none() => Some(self.game),
            Game::Bid(_) if self.pass_count - self.passes_at_bid >= PASSES_TO_CLOSE => {
                Some(self.game)
            }
            Game::Bid(_) => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.outcome().is_some()
    }

    /// The rung offered to the player on turn.
    pub fn offer(&self) -> Result<Bid, AuctionError> {
        if let Game::Bid(bid) = self.game {
            if bid.next().is_none() {
                return Err(AuctionError::LadderExhausted(self.game));
            }
        }
        if let Some(outcome) = self.outcome() {
            return Err(AuctionError::Closed(outcome));
        }
        self.game
            .next_offer()
            .ok_or(AuctionError::LadderExhausted(self.game))
    }

    pub fn accept(&mut self) -> Result<Bid, AuctionError> {
        let bid = self.offer()?;
        self.game = Game::Bid(bid);
        self.declarer = Some(self.turn);
        self.passes_at_bid = self.pass_count;
        self.turn = self.turn.next();
        Ok(bid)
    }

    pub fn pass(&mut self) -> Result<(), AuctionError> {
        self.offer()?;
        self.pass_count += 1;
        self.turn = self.turn.next();
        Ok(())
    }

    /// Records the outcome so a voided auction reads as `passed`.
    fn settle(&mut self) -> Game {
        if let Some(outcome) = self.outcome() {
            self.game = outcome;
        }
        self.game
    }

    /// Offers rungs around the table until the auction closes.
    pub fn run(
        &mut self,
        hands: &[Hand; 3],
        strategy: &mut dyn BidStrategy,
        rng: &mut dyn Randomness,
    ) -> Result<Game, AuctionError> {
        while !self.is_closed() {
            let offered = self.offer()?;
            let seat = self.turn;
            let view = BidView {
                seat,
                hand: &hands[seat.index()],
                offered,
                standing: self.game,
                high_bidder: self.declarer,
                pass_count: self.pass_count,
            };
            let accepted = strategy.accept_bid(&view, rng);
            debug!(
                target: "tarock::auction",
                seat = %seat,
                offered = %offered,
                accepted,
                pass_count = self.pass_count,
                "bid decision"
            );
            if accepted {
                self.accept()?;
            } else {
                self.pass()?;
            }
        }
        Ok(self.settle())
    }
}
