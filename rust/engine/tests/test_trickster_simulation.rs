use cardplay_engine::cards::{french_deck, Card, Suit, Value};
use cardplay_engine::dealer::TopDealer;
use cardplay_engine::game::{CompleteDealGame, PickGame};
use cardplay_engine::shuffler::DeepShuffler;
use cardplay_engine::simulation::special_card_positions;
use cardplay_engine::trickster::Trickster;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn ace_of_hearts() -> Card {
    Card::new(Suit::Hearts, Value::Ace)
}

#[test]
fn trickster_deals_special_card_within_first_four() {
    let mut rng = ChaCha20Rng::seed_from_u64(10_000);
    let trickster = Trickster::new(ace_of_hearts(), 4).unwrap();
    let game = PickGame::new(&trickster, &trickster);
    let histogram =
        special_card_positions(&game, &french_deck(), &ace_of_hearts(), 10_000, &mut rng);

    assert_eq!(histogram.games(), 10_000);
    assert_eq!(histogram.missing(), 0);
    assert!(
        histogram.share_within(4) > 0.99,
        "share within 4: {}",
        histogram.share_within(4)
    );
    // roughly 26%, 38%, 27% and 9% for the first four deals
    for i in 0..4 {
        assert!(histogram.count_at(i) > 500, "{:?}", histogram.counts());
    }
}

#[test]
fn honest_game_spreads_the_card_over_the_deck() {
    let mut rng = ChaCha20Rng::seed_from_u64(10_001);
    let game = PickGame::new(&TopDealer, &DeepShuffler);
    let histogram =
        special_card_positions(&game, &french_deck(), &ace_of_hearts(), 5_000, &mut rng);
    // 4 / 52 expected
    assert!(histogram.share_within(4) < 0.12);
    assert!(histogram.counts().len() > 40);
}

#[test]
fn trickster_hands_still_hold_the_whole_deck() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let trickster = Trickster::new(ace_of_hearts(), 4).unwrap();
    let game = PickGame::new(&trickster, &trickster);
    for _ in 0..20 {
        let hand = game.deal_all(&french_deck(), &mut rng).remove(0);
        let mut sorted = hand.clone();
        sorted.sort();
        let mut expected = french_deck().to_vec();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn same_seed_replays_the_trick() {
    let deal = |seed| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let trickster = Trickster::new(ace_of_hearts(), 4).unwrap();
        PickGame::new(&trickster, &trickster).deal_all(&french_deck(), &mut rng)
    };
    assert_eq!(deal(99), deal(99));
}
