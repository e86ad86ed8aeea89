use crate::model::bid::Game;
use crate::model::player::Player;
use crate::model::score::ScoreBoard;
use serde::{Deserialize, Serialize};

/// Result record of one deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealOutcome {
    pub player_score: u32,
    pub defender_score: u32,
    pub won: bool,
    pub game: Game,
    pub declarer: Option<Player>,
}

impl DealOutcome {
    pub fn new(scores: &ScoreBoard, game: Game, declarer: Option<Player>) -> Self {
        Self {
            player_score: scores.player(),
            defender_score: scores.defender(),
            won: scores.declarer_won(),
            game,
            declarer,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
