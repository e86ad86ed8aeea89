use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
    Trump = 4,
}

/// The two colored-suit families that share a rank sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Red,
    Black,
}

impl Suit {
    pub const ALL: [Suit; 5] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Spades,
        Suit::Trump,
    ];

    pub const COLORS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            4 => Some(Suit::Trump),
            _ => None,
        }
    }

    pub const fn is_trump(self) -> bool {
        matches!(self, Suit::Trump)
    }

    pub const fn group(self) -> Option<ColorGroup> {
        match self {
            Suit::Hearts | Suit::Diamonds => Some(ColorGroup::Red),
            Suit::Clubs | Suit::Spades => Some(ColorGroup::Black),
            Suit::Trump => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
            Suit::Trump => "T",
        };
        f.write_str(symbol)
    }
}
