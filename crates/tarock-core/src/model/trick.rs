use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::player::Player;
use crate::model::suit::Suit;

pub const TRICK_SIZE: usize = 3;

/// Cards face-up in the active trick, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ground {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickPhase {
    Leading,
    Following,
    Resolving,
}

impl Ground {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(TRICK_SIZE),
        }
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

    pub fn is_complete(&self) -> bool {
        self.cards.len() == TRICK_SIZE
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit)
    }

    pub fn phase(&self) -> TrickPhase {
        match self.cards.len() {
            0 => TrickPhase::Leading,
            n if n < TRICK_SIZE => TrickPhase::Following,
            _ => TrickPhase::Resolving,
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the ground, handing back the resolved trick.
    pub fn clear(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

/// Cards `hand` may play onto `ground`: the led suit if held, else trumps if held,
/// else anything.
pub fn legal_plays(hand: &Hand, ground: &[Card]) -> Vec<Card> {
    let Some(led) = ground.first().map(|card| card.suit) else {
        return hand.cards().to_vec();
    };
    for suit in [led, Suit::Trump] {
        let matching: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
        if !matching.is_empty() {
            return matching;
        }
    }
    hand.cards().to_vec()
}

/// Position of the winning card: the best trump if any were played, else the best
/// card of the led suit.
pub fn winning_index(ground: &[Card]) -> Option<usize> {
    let led = ground.first()?.suit;
    let suit = if ground.iter().any(|card| card.is_trump()) {
        Suit::Trump
    } else {
        led
    };
    ground
        .iter()
        .enumerate()
        .filter(|(_, card)| card.suit == suit)
        .fold(None, |best: Option<(usize, Card)>, (index, &card)| match best {
            Some((_, top)) if !card.outranks(top) => best,
            _ => Some((index, card)),
        })
        .map(|(index, _)| index)
}

/// Seat that played the winning card, counting from the trick's leader.
pub fn trick_winner(leader: Player, ground: &[Card]) -> Option<Player> {
    winning_index(ground).map(|index| leader.advance(index))
}
