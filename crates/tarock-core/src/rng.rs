use crate::model::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// Source of every random decision in a deal: deck shuffles, the talon-pickup
/// reshuffle, and strategies that want a fair coin.
pub trait Randomness {
    fn shuffle(&mut self, cards: &mut [Card]);

    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng + ?Sized> Randomness for R {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(self);
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::Randomness;
    use crate::model::card::Card;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let mut left: Vec<Card> = (1..=22).map(Card::trump).collect();
        let mut right = left.clone();
        Randomness::shuffle(&mut a, &mut left);
        Randomness::shuffle(&mut b, &mut right);
        assert_eq!(left, right);
        let flips_a: Vec<bool> = (0..16).map(|_| a.coin_flip()).collect();
        let flips_b: Vec<bool> = (0..16).map(|_| b.coin_flip()).collect();
        assert_eq!(flips_a, flips_b);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut rng = StdRng::seed_from_u64(1);
        let source: &mut dyn Randomness = &mut rng;
        let mut cards: Vec<Card> = (1..=22).map(Card::trump).collect();
        source.shuffle(&mut cards);
        assert_eq!(cards.len(), 22);
    }
}
