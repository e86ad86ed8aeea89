use crate::model::suit::ColorGroup;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Jack,
    Rider,
    Queen,
    King,
}

/// Reference order for hearts and diamonds: descending pips, then ascending faces.
pub const RED_SEQUENCE: [Rank; 8] = [
    Rank::Number(4),
    Rank::Number(3),
    Rank::Number(2),
    Rank::Number(1),
    Rank::Jack,
    Rank::Rider,
    Rank::Queen,
    Rank::King,
];

/// Reference order for clubs and spades: ascending pips, then ascending faces.
pub const BLACK_SEQUENCE: [Rank; 8] = [
    Rank::Number(7),
    Rank::Number(8),
    Rank::Number(9),
    Rank::Number(10),
    Rank::Jack,
    Rank::Rider,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    pub const FACES: [Rank; 4] = [Rank::Jack, Rank::Rider, Rank::Queen, Rank::King];
    pub const RED_PIPS: [u8; 4] = [1, 2, 3, 4];
    pub const BLACK_PIPS: [u8; 4] = [7, 8, 9, 10];
    pub const TRUMP_HIGH: u8 = 22;

    pub const fn number(self) -> Option<u8> {
        match self {
            Rank::Number(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_face(self) -> bool {
        !matches!(self, Rank::Number(_))
    }

    pub const fn sequence(group: ColorGroup) -> &'static [Rank; 8] {
        match group {
            ColorGroup::Red => &RED_SEQUENCE,
            ColorGroup::Black => &BLACK_SEQUENCE,
        }
    }

    /// Whether `self` beats `other` within a color group (`Some`) or the trump suit (`None`).
    ///
    /// Colored ranks are scanned over the reversed reference sequence: whichever rank
    /// appears first wins. Applied to both groups unchanged, this makes 10 beat 7 in
    /// black suits but 1 beat 4 in red suits.
    // NOTE: the red/black pip asymmetry is kept as-is until checked against the
    // published three-hand rules.
    pub fn outranks(self, other: Rank, group: Option<ColorGroup>) -> bool {
        match group {
            None => match (self, other) {
                (Rank::Number(a), Rank::Number(b)) => a > b,
                _ => false,
            },
            Some(group) => scan_outranks(Self::sequence(group), self, other),
        }
    }
}

fn scan_outranks(sequence: &[Rank], a: Rank, b: Rank) -> bool {
    for rank in sequence.iter().rev() {
        if *rank == a {
            return true;
        }
        if *rank == b {
            return false;
        }
    }
    false
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(value) => write!(f, "{value}"),
            Rank::Jack => f.write_str("J"),
            Rank::Rider => f.write_str("R"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
        }
    }
}
