use crate::game::outcome::DealOutcome;
use crate::model::auction::{AuctionError, AuctionState};
use crate::model::bid::Game;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::Player;
use crate::model::score::{ScoreBoard, ScoringError, Side, score_cards};
use crate::model::talon::Talon;
use crate::model::trick::{Ground, legal_plays, trick_winner};
use crate::rng::Randomness;
use crate::strategy::{BidStrategy, PlayStrategy, PlayView};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealPhase {
    Auction,
    Talon,
    Playing,
    Finished,
}

/// Everything that changes during one deal, from the first bid to the last trick.
#[derive(Debug, Clone)]
pub struct DealState {
    hands: [Hand; 3],
    turn: Player,
    ground: Ground,
    discard: Vec<Card>,
    talon: Talon,
    set_aside: Vec<Card>,
    auction: AuctionState,
    scores: ScoreBoard,
    phase: DealPhase,
    tricks_completed: usize,
    dealt: usize,
}

impl DealState {
    pub fn deal(deck: &Deck) -> Self {
        let (hands, talon) = deck.split();
        Self::from_parts(hands, talon)
    }

    /// Starts a deal from explicit hands (seat order) and talon.
    pub fn from_parts(hands: [Vec<Card>; 3], talon: Vec<Card>) -> Self {
        let dealt = hands.iter().map(Vec::len).sum::<usize>() + talon.len();
        Self {
            hands: hands.map(Hand::with_cards),
            turn: Player::Forehand,
            ground: Ground::new(),
            discard: Vec::new(),
            talon: Talon::new(talon),
            set_aside: Vec::new(),
            auction: AuctionState::new(),
            scores: ScoreBoard::new(),
            phase: DealPhase::Auction,
            tricks_completed: 0,
            dealt,
        }
    }

    pub fn phase(&self) -> DealPhase {
        self.phase
    }

    pub fn hand(&self, seat: Player) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn talon(&self) -> &Talon {
        &self.talon
    }

    /// Cards scored without being played: the declarer's set-aside and talon halves
    /// credited straight to the defenders.
    pub fn set_aside(&self) -> &[Card] {
        &self.set_aside
    }

    pub fn game(&self) -> Game {
        self.auction.game()
    }

    pub fn declarer(&self) -> Option<Player> {
        self.auction.declarer()
    }

    pub fn pass_count(&self) -> u32 {
        self.auction.pass_count()
    }

    pub fn auction(&self) -> &AuctionState {
        &self.auction
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn tricks_completed(&self) -> usize {
        self.tricks_completed
    }

    /// Every card still accounted for; equals the number dealt at all times.
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>()
            + self.ground.len()
            + self.discard.len()
            + self.talon.len()
            + self.set_aside.len()
    }

    pub fn dealt(&self) -> usize {
        self.dealt
    }

    pub fn run_auction(
        &mut self,
        strategy: &mut dyn BidStrategy,
        rng: &mut dyn Randomness,
    ) -> Result<Game, DealError> {
        self.expect_phase(DealPhase::Auction)?;
        let game = self.auction.run(&self.hands, strategy, rng)?;
        info!(
            target: "tarock::deal",
            game = %game,
            declarer = ?self.auction.declarer(),
            passes = self.auction.pass_count(),
            "auction closed"
        );
        self.phase = DealPhase::Talon;
        Ok(game)
    }

    /// Hands out the talon for the contract the auction settled on.
    pub fn distribute_talon(&mut self, rng: &mut dyn Randomness) -> Result<(), DealError> {
        self.expect_phase(DealPhase::Talon)?;
        if let (Game::Bid(bid), Some(declarer)) = (self.game(), self.declarer()) {
            let transfer = self.talon.release(bid);
            let count = transfer.set_aside_count();
            if count > 0 {
                let hand = &mut self.hands[declarer.index()];
                hand.absorb(&transfer.absorbed);
                hand.shuffle(rng);
                let aside = hand.take_front(count);
                let points = self.scores.credit_cards(Side::Declarer, &aside)?;
                debug!(
                    target: "tarock::talon",
                    declarer = %declarer,
                    picked_up = count,
                    points,
                    "declarer set aside"
                );
                self.set_aside.extend(aside);
            }
            if !transfer.to_defenders.is_empty() {
                let points = self
                    .scores
                    .credit_cards(Side::Defenders, &transfer.to_defenders)?;
                debug!(
                    target: "tarock::talon",
                    cards = transfer.to_defenders.len(),
                    points,
                    "talon credited to defenders"
                );
                self.set_aside.extend(transfer.to_defenders);
            }
        }
        // The seat on turn when bidding closed leads the first trick.
        self.turn = self.auction.turn();
        self.phase = if self.hands[self.turn.index()].is_empty() {
            DealPhase::Finished
        } else {
            DealPhase::Playing
        };
        debug_assert_eq!(self.card_count(), self.dealt);
        Ok(())
    }

    /// Cards the player on turn may put on the ground.
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_plays(&self.hands[self.turn.index()], self.ground.cards())
    }

    pub fn play_card(&mut self, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.phase != DealPhase::Playing {
            return Err(PlayError::NotInPlayPhase);
        }
        let seat = self.turn;
        if !self.hands[seat.index()].contains(card) {
            return Err(PlayError::CardNotInHand(card));
        }
        if !self.legal_plays().contains(&card) {
            return Err(PlayError::IllegalCard(card));
        }

        self.hands[seat.index()].remove(card);
        self.ground.push(card);
        self.turn = seat.next();
        debug!(target: "tarock::play", seat = %seat, card = %card, "played");

        if self.ground.is_complete() {
            let (winner, points) = self.resolve_trick()?;
            Ok(PlayOutcome::TrickCompleted { winner, points })
        } else {
            Ok(PlayOutcome::Played)
        }
    }

    /// Scores the full ground, hands the lead to the winner and checks for the end.
    fn resolve_trick(&mut self) -> Result<(Player, u32), PlayError> {
        // Three plays bring the turn back round to the leader.
        let leader = self.turn;
        let winner = trick_winner(leader, self.ground.cards()).ok_or(PlayError::EmptyTrick)?;
        let points = score_cards(self.ground.cards())?;
        match self.declarer() {
            Some(declarer) if declarer == winner => self.scores.credit(Side::Declarer, points),
            Some(_) => self.scores.credit(Side::Defenders, points),
            // A passed deal is played out but never scored.
            None => {}
        }
        self.discard.extend(self.ground.clear());
        self.turn = winner;
        self.tricks_completed += 1;
        debug!(
            target: "tarock::play",
            trick = self.tricks_completed,
            winner = %winner,
            points,
            "trick resolved"
        );
        if self.hands[winner.index()].is_empty() {
            self.phase = DealPhase::Finished;
        }
        Ok((winner, points))
    }

    /// Plays tricks until the player on turn has nothing left.
    pub fn play_out(
        &mut self,
        strategy: &mut dyn PlayStrategy,
        rng: &mut dyn Randomness,
    ) -> Result<(), DealError> {
        if self.phase == DealPhase::Finished {
            return Ok(());
        }
        self.expect_phase(DealPhase::Playing)?;
        while self.phase == DealPhase::Playing {
            let seat = self.turn;
            let legal = self.legal_plays();
            if legal.is_empty() {
                return Err(PlayError::NoLegalPlay(seat).into());
            }
            let view = PlayView {
                seat,
                hand: &self.hands[seat.index()],
                ground: self.ground.cards(),
                legal: &legal,
                game: self.game(),
                declarer: self.declarer(),
            };
            let card = strategy
                .choose_play(&view, rng)
                .ok_or(PlayError::NoLegalPlay(seat))?;
            self.play_card(card)?;
            debug_assert_eq!(self.card_count(), self.dealt);
        }
        Ok(())
    }

    pub fn outcome(&self) -> DealOutcome {
        DealOutcome::new(&self.scores, self.game(), self.declarer())
    }

    fn expect_phase(&self, expected: DealPhase) -> Result<(), DealError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DealError::OutOfPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Runs one deal from a prepared deck to its result record.
pub fn play_deal(
    deck: &Deck,
    bidder: &mut dyn BidStrategy,
    player: &mut dyn PlayStrategy,
    rng: &mut dyn Randomness,
) -> Result<DealOutcome, DealError> {
    let mut state = DealState::deal(deck);
    state.run_auction(bidder, rng)?;
    state.distribute_talon(rng)?;
    state.play_out(player, rng)?;
    let outcome = state.outcome();
    info!(
        target: "tarock::deal",
        player_score = outcome.player_score,
        defender_score = outcome.defender_score,
        won = outcome.won,
        tricks = state.tricks_completed(),
        "deal finished"
    );
    Ok(outcome)
}

/// Shuffles a fresh deck from `rng` and plays it out.
pub fn simulate_deal(
    bidder: &mut dyn BidStrategy,
    player: &mut dyn PlayStrategy,
    rng: &mut dyn Randomness,
) -> Result<DealOutcome, DealError> {
    let deck = Deck::shuffled(rng);
    play_deal(&deck, bidder, player, rng)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Player, points: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    NotInPlayPhase,
    CardNotInHand(Card),
    IllegalCard(Card),
    NoLegalPlay(Player),
    EmptyTrick,
    Scoring(ScoringError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::NotInPlayPhase => write!(f, "deal is not in the play phase"),
            PlayError::CardNotInHand(card) => write!(f, "{card} is not in the player's hand"),
            PlayError::IllegalCard(card) => write!(f, "{card} may not be played now"),
            PlayError::NoLegalPlay(seat) => write!(f, "{seat} has no legal card to play"),
            PlayError::EmptyTrick => write!(f, "cannot resolve a trick with no cards"),
            PlayError::Scoring(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PlayError {}

impl From<ScoringError> for PlayError {
    fn from(err: ScoringError) -> Self {
        PlayError::Scoring(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    OutOfPhase {
        expected: DealPhase,
        actual: DealPhase,
    },
    Auction(AuctionError),
    Scoring(ScoringError),
    Play(PlayError),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::OutOfPhase { expected, actual } => {
                write!(f, "expected the {expected:?} phase but the deal is in {actual:?}")
            }
            DealError::Auction(err) => write!(f, "auction: {err}"),
            DealError::Scoring(err) => write!(f, "scoring: {err}"),
            DealError::Play(err) => write!(f, "play: {err}"),
        }
    }
}

impl std::error::Error for DealError {}

impl From<AuctionError> for DealError {
    fn from(err: AuctionError) -> Self {
        DealError::Auction(err)
    }
}

impl From<ScoringError> for DealError {
    fn from(err: ScoringError) -> Self {
        DealError::Scoring(err)
    }
}

impl From<PlayError> for DealError {
    fn from(err: PlayError) -> Self {
        DealError::Play(err)
    }
}
