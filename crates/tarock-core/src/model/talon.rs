use crate::model::bid::Bid;
use crate::model::card::Card;

pub const HALF: usize = 3;

/// The six cards dealt to nobody, consumed once the auction settles on a bid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Talon {
    cards: Vec<Card>,
}

/// How the talon splits for a contract: what the declarer picks up and what goes
/// straight to the defenders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalonTransfer {
    pub absorbed: Vec<Card>,
    pub to_defenders: Vec<Card>,
}

impl TalonTransfer {
    /// Cards the declarer must set aside after picking up.
    pub fn set_aside_count(&self) -> usize {
        self.absorbed.len()
    }
}

impl Talon {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn upper(&self) -> &[Card] {
        &self.cards[..HALF.min(self.cards.len())]
    }

    pub fn lower(&self) -> &[Card] {
        &self.cards[HALF.min(self.cards.len())..]
    }

    /// Empties the talon according to `bid`.
    pub fn release(&mut self, bid: Bid) -> TalonTransfer {
        let mut upper = std::mem::take(&mut self.cards);
        let lower = upper.split_off(HALF.min(upper.len()));
        match bid {
            Bid::Small => {
                upper.extend(lower);
                TalonTransfer {
                    absorbed: upper,
                    to_defenders: Vec::new(),
                }
            }
            Bid::Over => TalonTransfer {
                absorbed: upper,
                to_defenders: lower,
            },
            Bid::Under => TalonTransfer {
                absorbed: lower,
                to_defenders: upper,
            },
            Bid::Solo => {
                upper.extend(lower);
                TalonTransfer {
                    absorbed: Vec::new(),
                    to_defenders: upper,
                }
            }
        }
    }
}
