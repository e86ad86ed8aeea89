use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::{ColorGroup, Suit};
use crate::rng::Randomness;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const DECK_SIZE: usize = 54;
pub const HAND_SIZE: usize = 16;
pub const TALON_SIZE: usize = 6;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::COLORS {
            let pips = match suit.group() {
                Some(ColorGroup::Red) => Rank::RED_PIPS,
                _ => Rank::BLACK_PIPS,
            };
            for value in pips {
                cards.push(Card::new(Rank::Number(value), suit));
            }
            for face in Rank::FACES {
                cards.push(Card::new(face, suit));
            }
        }
        for value in 1..=Rank::TRUMP_HIGH {
            cards.push(Card::trump(value));
        }
        Self { cards }
    }

    /// A deck in a fixed order, for scripted deals.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffled(rng: &mut dyn Randomness) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Splits the deck into three hands of sixteen (in seat order) and the talon.
    pub fn split(&self) -> ([Vec<Card>; 3], Vec<Card>) {
        let mut chunks = self.cards.chunks(HAND_SIZE);
        let mut next = || chunks.next().map(<[Card]>::to_vec).unwrap_or_default();
        let hands = [next(), next(), next()];
        let talon = self
            .cards
            .get(3 * HAND_SIZE..)
            .map(<[Card]>::to_vec)
            .unwrap_or_default();
        (hands, talon)
    }
}
