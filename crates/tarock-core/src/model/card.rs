use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn trump(value: u8) -> Self {
        Self::new(Rank::Number(value), Suit::Trump)
    }

    pub const fn is_trump(self) -> bool {
        self.suit.is_trump()
    }

    /// Trump 1, 21 and 22.
    pub const fn is_trull(self) -> bool {
        matches!(
            (self.suit, self.rank),
            (Suit::Trump, Rank::Number(1 | 21 | 22))
        )
    }

    pub const fn point_value(self) -> u32 {
        if self.is_trull() {
            return 5;
        }
        match self.rank {
            Rank::Number(_) => 1,
            Rank::Jack => 2,
            Rank::Rider => 3,
            Rank::Queen => 4,
            Rank::King => 5,
        }
    }

    /// Compares two cards of the same suit. Cards of different suits never outrank
    /// each other; trick resolution filters by suit before asking.
    pub fn outranks(self, other: Card) -> bool {
        if self.suit != other.suit {
            return false;
        }
        self.rank.outranks(other.rank, self.suit.group())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}
