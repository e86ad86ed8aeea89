use tarock_core::model::card::Card;
use tarock_core::rng::Randomness;
use tarock_core::strategy::{PlayStrategy, PlayView};
use tracing::{Level, event};

/// Always puts down the first legal card in hand order.
///
/// An empty legal set yields `None`, which the engine reports as `NoLegalPlay`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalPlayer;

impl PlayStrategy for FirstLegalPlayer {
    fn choose_play(&mut self, view: &PlayView<'_>, _rng: &mut dyn Randomness) -> Option<Card> {
        let choice = view.legal.first().copied()?;
        event!(
            target: "tarock_bot::play",
            Level::TRACE,
            seat = %view.seat,
            legal_count = view.legal.len(),
            ground = view.ground.len(),
            chosen = %choice
        );
        Some(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::FirstLegalPlayer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tarock_core::model::bid::{Bid, Game};
    use tarock_core::model::card::Card;
    use tarock_core::model::hand::Hand;
    use tarock_core::model::player::Player;
    use tarock_core::model::rank::Rank;
    use tarock_core::model::suit::Suit;
    use tarock_core::model::trick::legal_plays;
    use tarock_core::strategy::{PlayStrategy, PlayView};

    #[test]
    fn picks_first_legal_card_in_hand_order() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::King, Suit::Hearts),
            Card::trump(9),
            Card::trump(4),
        ]);
        let ground = [Card::new(Rank::Number(8), Suit::Spades)];
        let legal = legal_plays(&hand, &ground);
        let view = PlayView {
            seat: Player::Rearhand,
            hand: &hand,
            ground: &ground,
            legal: &legal,
            game: Game::Bid(Bid::Small),
            declarer: Some(Player::Forehand),
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            FirstLegalPlayer.choose_play(&view, &mut rng),
            Some(Card::trump(9))
        );
    }

    #[test]
    fn empty_legal_set_yields_nothing() {
        let hand = Hand::new();
        let view = PlayView {
            seat: Player::Forehand,
            hand: &hand,
            ground: &[],
            legal: &[],
            game: Game::Passed,
            declarer: None,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(FirstLegalPlayer.choose_play(&view, &mut rng), None);
    }
}
