use rand::SeedableRng;
use rand::rngs::StdRng;
use tarock_bot::{BidThresholds, BidderKind, Policy};
use tarock_core::model::bid::Game;
use tarock_core::model::deck::Deck;

#[test]
fn seeded_deals_replay_identically() {
    for kind in [BidderKind::Threshold, BidderKind::CoinFlip] {
        for seed in 0..10u64 {
            let run = || {
                let mut rng = StdRng::seed_from_u64(seed);
                Policy::new(kind, BidThresholds::default())
                    .simulate(&mut rng)
                    .unwrap()
            };
            assert_eq!(run(), run(), "{kind} seed {seed}");
        }
    }
}

#[test]
fn outcomes_stay_within_the_point_total() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut policy = Policy::new(BidderKind::CoinFlip, BidThresholds::default());
    for _ in 0..50 {
        let outcome = policy.simulate(&mut rng).unwrap();
        match outcome.game {
            Game::Passed => {
                assert_eq!(outcome.player_score + outcome.defender_score, 0);
                assert_eq!(outcome.declarer, None);
            }
            Game::Bid(_) => {
                assert!(outcome.declarer.is_some());
                assert_eq!(outcome.player_score + outcome.defender_score, 70);
            }
            Game::None => panic!("auction left open"),
        }
        assert_eq!(outcome.won, outcome.player_score > outcome.defender_score);
    }
}

#[test]
fn unreachable_thresholds_pass_every_deal() {
    let thresholds = BidThresholds {
        small: 100,
        under: 100,
        over: 100,
        solo: 100,
    };
    let mut policy = Policy::new(BidderKind::Threshold, thresholds);
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = policy.play(&Deck::shuffled_with_seed(9), &mut rng).unwrap();
    assert_eq!(outcome.game, Game::Passed);
    assert!(!outcome.won);
}
