use crate::model::card::Card;
use std::fmt;

pub const GROUP_SIZE: usize = 3;
const GROUP_DEDUCTION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    UnevenCount(usize),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::UnevenCount(count) => {
                write!(f, "cannot score {count} cards: count must be a multiple of 3")
            }
        }
    }
}

impl std::error::Error for ScoringError {}

/// Scores cards in consecutive groups of three, each worth its point sum minus two.
pub fn score_cards(cards: &[Card]) -> Result<u32, ScoringError> {
    if cards.len() % GROUP_SIZE != 0 {
        return Err(ScoringError::UnevenCount(cards.len()));
    }
    Ok(cards.chunks_exact(GROUP_SIZE).map(group_points).sum())
}

fn group_points(group: &[Card]) -> u32 {
    let raw: u32 = group.iter().map(|card| card.point_value()).sum();
    // Every card is worth at least one point, so a full group never goes negative.
    raw.saturating_sub(GROUP_DEDUCTION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Declarer,
    Defenders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    player: u32,
    defender: u32,
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self {
            player: 0,
            defender: 0,
        }
    }

    pub fn credit(&mut self, side: Side, points: u32) {
        match side {
            Side::Declarer => self.player += points,
            Side::Defenders => self.defender += points,
        }
    }

    /// Scores `cards` and credits the result to `side` in one event.
    pub fn credit_cards(&mut self, side: Side, cards: &[Card]) -> Result<u32, ScoringError> {
        let points = score_cards(cards)?;
        self.credit(side, points);
        Ok(points)
    }

    pub fn player(&self) -> u32 {
        self.player
    }

    pub fn defender(&self) -> u32 {
        self.defender
    }

    pub fn declarer_won(&self) -> bool {
        self.player > self.defender
    }
}
