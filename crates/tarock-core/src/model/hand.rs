use crate::model::card::Card;
use crate::model::suit::Suit;
use crate::rng::Randomness;

/// Cards held by one player, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn absorb(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Removes `card` if held. A missing card leaves the hand untouched.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes and returns the first `count` cards (fewer if the hand is shorter).
    pub fn take_front(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn shuffle(&mut self, rng: &mut dyn Randomness) {
        rng.shuffle(&mut self.cards);
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|c| c.suit == suit).count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Number(8), Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
    }

    #[test]
    fn removing_missing_card_is_a_no_op() {
        let mut hand = Hand::with_cards(vec![Card::trump(5), Card::trump(6)]);
        let before = hand.clone();
        assert!(!hand.remove(Card::trump(7)));
        assert_eq!(hand, before);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::King, Suit::Spades));
        hand.add(Card::trump(3));
        hand.absorb(&[Card::new(Rank::Number(2), Suit::Hearts)]);
        assert_eq!(
            hand.cards(),
            &[
                Card::new(Rank::King, Suit::Spades),
                Card::trump(3),
                Card::new(Rank::Number(2), Suit::Hearts),
            ]
        );
    }

    #[test]
    fn take_front_drains_leading_cards() {
        let mut hand = Hand::with_cards(vec![Card::trump(1), Card::trump(2), Card::trump(3)]);
        assert_eq!(hand.take_front(2), vec![Card::trump(1), Card::trump(2)]);
        assert_eq!(hand.cards(), &[Card::trump(3)]);
        assert_eq!(hand.take_front(5), vec![Card::trump(3)]);
        assert!(hand.is_empty());
    }

    #[test]
    fn counts_cards_by_suit() {
        let hand = Hand::with_cards(vec![
            Card::trump(4),
            Card::trump(18),
            Card::new(Rank::Queen, Suit::Diamonds),
        ]);
        assert_eq!(hand.count_suit(Suit::Trump), 2);
        assert!(hand.has_suit(Suit::Diamonds));
        assert!(!hand.has_suit(Suit::Hearts));
    }
}
