use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bid {
    Small,
    Under,
    Over,
    Solo,
}

/// Rungs of the auction, lowest first.
pub const LADDER: [Bid; 4] = [Bid::Small, Bid::Under, Bid::Over, Bid::Solo];

impl Bid {
    pub const fn rung(self) -> usize {
        match self {
            Bid::Small => 0,
            Bid::Under => 1,
            Bid::Over => 2,
            Bid::Solo => 3,
        }
    }

    pub const fn next(self) -> Option<Bid> {
        match self {
            Bid::Small => Some(Bid::Under),
            Bid::Under => Some(Bid::Over),
            Bid::Over => Some(Bid::Solo),
            Bid::Solo => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Bid::Small => "small",
            Bid::Under => "under",
            Bid::Over => "over",
            Bid::Solo => "solo",
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the auction stands: nothing bid yet, a standing bid, or everyone passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    #[default]
    None,
    Bid(Bid),
    Passed,
}

impl Game {
    /// The rung a player would be offered next, if any remain.
    pub const fn next_offer(self) -> Option<Bid> {
        match self {
            Game::None => Some(LADDER[0]),
            Game::Bid(bid) => bid.next(),
            Game::Passed => None,
        }
    }

    pub const fn bid(self) -> Option<Bid> {
        match self {
            Game::Bid(bid) => Some(bid),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Game::None => f.write_str("none"),
            Game::Bid(bid) => fmt::Display::fmt(bid, f),
            Game::Passed => f.write_str("passed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bid, Game, LADDER};

    #[test]
    fn ladder_is_ordered_by_rung() {
        for (index, bid) in LADDER.iter().enumerate() {
            assert_eq!(bid.rung(), index);
        }
        assert!(Bid::Small < Bid::Solo);
    }

    #[test]
    fn next_climbs_until_solo() {
        let mut climbed = vec![Bid::Small];
        while let Some(next) = climbed.last().and_then(|bid| bid.next()) {
            climbed.push(next);
        }
        assert_eq!(climbed, LADDER.to_vec());
    }

    #[test]
    fn offers_start_at_the_bottom_rung() {
        assert_eq!(Game::None.next_offer(), Some(Bid::Small));
        assert_eq!(Game::Bid(Bid::Over).next_offer(), Some(Bid::Solo));
        assert_eq!(Game::Bid(Bid::Solo).next_offer(), None);
        assert_eq!(Game::Passed.next_offer(), None);
    }

    #[test]
    fn game_serializes_in_lowercase() {
        assert_eq!(serde_json::to_string(&Game::Passed).unwrap(), "\"passed\"");
        assert_eq!(
            serde_json::to_string(&Game::Bid(Bid::Under)).unwrap(),
            "{\"bid\":\"under\"}"
        );
    }
}
