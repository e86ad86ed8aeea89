use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Forehand = 0,
    Middlehand = 1,
    Rearhand = 2,
}

impl Player {
    pub const LOOP: [Player; 3] = [Player::Forehand, Player::Middlehand, Player::Rearhand];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::Forehand),
            1 => Some(Player::Middlehand),
            2 => Some(Player::Rearhand),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Player {
        match self {
            Player::Forehand => Player::Middlehand,
            Player::Middlehand => Player::Rearhand,
            Player::Rearhand => Player::Forehand,
        }
    }

    pub const fn previous(self) -> Player {
        match self {
            Player::Forehand => Player::Rearhand,
            Player::Middlehand => Player::Forehand,
            Player::Rearhand => Player::Middlehand,
        }
    }

    /// The player `steps` seats further along the cycle.
    pub const fn advance(self, steps: usize) -> Player {
        match (self.index() + steps) % Self::LOOP.len() {
            0 => Player::Forehand,
            1 => Player::Middlehand,
            _ => Player::Rearhand,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Player::Forehand => "Forehand",
            Player::Middlehand => "Middlehand",
            Player::Rearhand => "Rearhand",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn next_wraps_around() {
        assert_eq!(Player::Rearhand.next(), Player::Forehand);
    }

    #[test]
    fn previous_wraps_around() {
        assert_eq!(Player::Forehand.previous(), Player::Rearhand);
    }

    #[test]
    fn advance_matches_repeated_next() {
        for seat in Player::LOOP {
            let mut stepped = seat;
            for steps in 0..7 {
                assert_eq!(seat.advance(steps), stepped);
                stepped = stepped.next();
            }
        }
    }

    #[test]
    fn index_roundtrip() {
        for (i, seat) in Player::LOOP.iter().enumerate() {
            assert_eq!(Player::from_index(i), Some(*seat));
            assert_eq!(seat.index(), i);
        }
    }
}
