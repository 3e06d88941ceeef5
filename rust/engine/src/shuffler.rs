use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use tracing::{debug, trace};

use crate::errors::ConfigError;
use crate::sequence::Sequence;

/// A policy producing a reordering of the whole deck.
///
/// Implementations must return a permutation of the input: same size, same
/// multiset of cards.
pub trait Shuffler<T: Clone> {
    fn shuffle(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> Sequence<T>;
}

/// Leaves the deck as it is. Useful to make games deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoShuffler;

impl<T: Clone> Shuffler<T> for NoShuffler {
    fn shuffle(&self, deck: &Sequence<T>, _rng: &mut dyn RngCore) -> Sequence<T> {
        deck.clone()
    }
}

/// Uniformly random permutation.
///
/// The card at original position `n` is inserted at a uniformly drawn
/// position in `[0, n]` of the growing result, so every ordering of the deck
/// is equally likely.
///
/// # Examples
///
/// ```
/// use cardplay_engine::sequence::Sequence;
/// use cardplay_engine::shuffler::{DeepShuffler, Shuffler};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let deck: Sequence<u32> = (0..52).collect();
/// let a = DeepShuffler.shuffle(&deck, &mut ChaCha20Rng::seed_from_u64(7));
/// let b = DeepShuffler.shuffle(&deck, &mut ChaCha20Rng::seed_from_u64(7));
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 52);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepShuffler;

impl<T: Clone> Shuffler<T> for DeepShuffler {
    fn shuffle(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> Sequence<T> {
        let mut shuffled = Sequence::new();
        for (n, card) in deck.iter().enumerate() {
            let position = rng.random_range(0..=n);
            shuffled = shuffled.insert_nth(position, card.clone());
        }
        shuffled
    }
}

/// Approximates a shuffle done by hand.
///
/// Repeats a random number of times in `[0, max_shuffles)` a single move:
/// a packet starting near one third of the deck height is lifted out and
/// dropped at the end. The result is deliberately not uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanLikeShuffler {
    max_shuffles: usize,
}

impl HumanLikeShuffler {
    pub fn new(max_shuffles: usize) -> Result<Self, ConfigError> {
        if max_shuffles == 0 {
            return Err(ConfigError::ZeroMaxShuffles);
        }
        Ok(Self { max_shuffles })
    }

    pub fn max_shuffles(&self) -> usize {
        self.max_shuffles
    }
}

// Standard deviation of the packet start, as a fraction of the deck height.
const CUT_SPREAD: f64 = 1.0 / 8.0;

/// Moves one packet from near the first third of the deck to the end.
///
/// The start position is the first third plus a normally distributed offset,
/// clamped to the deck.
pub(crate) fn cut_to_bottom<T: Clone>(deck: &Sequence<T>, rng: &mut dyn RngCore) -> Sequence<T> {
    let height = deck.len();
    if height < 2 {
        return deck.clone();
    }
    let offset: f64 = rng.sample(StandardNormal);
    cut_from(deck, packet_start(height, offset), rng)
}

/// First third of `height` shifted by `offset` standard deviations, clamped
/// to `[0, height - 1]`. `height` must be at least 1.
fn packet_start(height: usize, offset: f64) -> usize {
    (height as f64 / 3.0 + offset * CUT_SPREAD * height as f64)
        .round()
        .clamp(0.0, (height - 1) as f64) as usize
}

/// Moves a packet starting at `start` to the end of the deck.
///
/// The packet length is uniform over the cards from `start` to the end of
/// the deck. Nothing happens when fewer than two cards lie below `start`.
fn cut_from<T: Clone>(deck: &Sequence<T>, start: usize, rng: &mut dyn RngCore) -> Sequence<T> {
    let height = deck.len();
    let remaining = height.saturating_sub(start);
    if remaining < 2 {
        return deck.clone();
    }
    let packet = rng.random_range(1..=remaining);
    trace!(start, packet, height, "cut packet to bottom");

    let mut cut = deck.clone();
    for _ in 0..packet {
        let (card, rest) = cut.remove_nth(start);
        cut = match card {
            Some(card) => rest.insert_last(card),
            None => rest,
        };
    }
    cut
}

impl<T: Clone> Shuffler<T> for HumanLikeShuffler {
    fn shuffle(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> Sequence<T> {
        let times = rng.random_range(0..self.max_shuffles);
        debug!(times, max = self.max_shuffles, "human-like shuffle");
        let mut shuffled = deck.clone();
        for _ in 0..times {
            shuffled = cut_to_bottom(&shuffled, rng);
        }
        shuffled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn sorted(deck: &Sequence<u32>) -> Vec<u32> {
        let mut v = deck.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn no_shuffler_is_identity() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let deck: Sequence<u32> = (0..20).collect();
        assert_eq!(NoShuffler.shuffle(&deck, &mut rng), deck);
    }

    #[test]
    fn deep_shuffle_keeps_all_cards() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let deck: Sequence<u32> = (0..52).collect();
        let shuffled = DeepShuffler.shuffle(&deck, &mut rng);
        assert_eq!(sorted(&shuffled), deck.to_vec());
        assert_ne!(shuffled, deck, "52 cards should not come back in order");
    }

    #[test]
    fn deep_shuffle_hits_every_permutation_of_three() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let deck: Sequence<u32> = (0..3).collect();
        let mut counts = std::collections::HashMap::new();
        let runs = 6000;
        for _ in 0..runs {
            *counts
                .entry(DeepShuffler.shuffle(&deck, &mut rng).to_vec())
                .or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            // expected 1000 each
            assert!((800..1200).contains(&count), "{perm:?} seen {count} times");
        }
    }

    #[test]
    fn human_like_requires_positive_max() {
        assert_eq!(HumanLikeShuffler::new(0), Err(ConfigError::ZeroMaxShuffles));
        assert_eq!(HumanLikeShuffler::new(5).unwrap().max_shuffles(), 5);
    }

    #[test]
    fn human_like_keeps_all_cards() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let shuffler = HumanLikeShuffler::new(12).unwrap();
        let deck: Sequence<u32> = (0..52).collect();
        for _ in 0..50 {
            let shuffled = shuffler.shuffle(&deck, &mut rng);
            assert_eq!(shuffled.len(), 52);
            assert_eq!(sorted(&shuffled), deck.to_vec());
        }
    }

    #[test]
    fn single_shuffle_bound_never_moves_cards() {
        // random_range(0..1) always yields zero repetitions
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let shuffler = HumanLikeShuffler::new(1).unwrap();
        let deck: Sequence<u32> = (0..52).collect();
        assert_eq!(shuffler.shuffle(&deck, &mut rng), deck);
    }

    #[test]
    fn cut_leaves_tiny_decks_alone() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let one: Sequence<u32> = Sequence::from(vec![1]);
        assert_eq!(cut_to_bottom(&one, &mut rng), one);
        let empty: Sequence<u32> = Sequence::new();
        assert_eq!(cut_to_bottom(&empty, &mut rng), empty);
    }

    #[test]
    fn start_clamps_into_the_deck() {
        assert_eq!(packet_start(30, 0.0), 10);
        assert_eq!(packet_start(30, 100.0), 29);
        assert_eq!(packet_start(30, -100.0), 0);
        assert_eq!(packet_start(1, 3.0), 0);
    }

    #[test]
    fn cut_from_last_card_leaves_deck_alone() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let deck: Sequence<u32> = (0..30).collect();
        let start = packet_start(deck.len(), 100.0);
        assert_eq!(start, deck.len() - 1);
        for _ in 0..20 {
            assert_eq!(cut_from(&deck, start, &mut rng), deck);
        }
        assert_eq!(cut_from(&deck, deck.len(), &mut rng), deck);
    }

    #[test]
    fn cut_from_moves_a_packet_to_the_end() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let deck: Sequence<u32> = (0..10).collect();
        for _ in 0..50 {
            let cut = cut_from(&deck, 8, &mut rng);
            // two cards below the start: one or both move, in order
            assert!(
                cut.to_vec() == vec![0, 1, 2, 3, 4, 5, 6, 7, 9, 8] || cut == deck,
                "{cut:?}"
            );
        }
    }

    #[test]
    fn cut_rotates_the_cards_below_the_start() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let deck: Sequence<u32> = (0..30).collect();
        for _ in 0..100 {
            let cut = cut_to_bottom(&deck, &mut rng);
            let start = cut
                .iter()
                .zip(deck.iter())
                .take_while(|(a, b)| a == b)
                .count();
            let below = &deck.as_slice()[start..];
            let moved = &cut.as_slice()[start..];
            let rotated = (0..=below.len()).any(|k| below[k..].iter().chain(&below[..k]).eq(moved));
            assert!(rotated, "{:?} is not a single packet move of {:?}", cut, deck);
        }
    }
}
