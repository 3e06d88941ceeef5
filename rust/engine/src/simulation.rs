//! Repeated games to observe where a given card lands in deal order.
//!
//! Used to check that the [`Trickster`](crate::trickster::Trickster) gets its
//! card out early, and to compare it against an honest dealer.

use rand::RngCore;
use serde::Serialize;
use tracing::info;

use crate::game::CompleteDealGame;
use crate::sequence::Sequence;

/// How often a card showed up at each deal index over many games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealPositionHistogram {
    counts: Vec<u64>,
    missing: u64,
    games: u64,
}

impl DealPositionHistogram {
    pub fn new() -> Self {
        Self {
            counts: Vec::new(),
            missing: 0,
            games: 0,
        }
    }

    /// Records one game in which the card was dealt at `index`, or not at all.
    pub fn record(&mut self, index: Option<usize>) {
        self.games += 1;
        match index {
            Some(i) => {
                if self.counts.len() <= i {
                    self.counts.resize(i + 1, 0);
                }
                self.counts[i] += 1;
            }
            None => self.missing += 1,
        }
    }

    pub fn games(&self) -> u64 {
        self.games
    }

    pub fn missing(&self) -> u64 {
        self.missing
    }

    pub fn count_at(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Fraction of games in which the card was among the first `k` deals.
    pub fn share_within(&self, k: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let hits: u64 = self.counts.iter().take(k).sum();
        hits as f64 / self.games as f64
    }
}

impl Default for DealPositionHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays `games` rounds of `game` and records at which deal `card` appears.
///
/// Hands are read in order and concatenated, so for multi-hand games the
/// index counts across hands. The first card equal to `card` counts.
pub fn special_card_positions<T: Clone + PartialEq>(
    game: &dyn CompleteDealGame<T>,
    deck: &Sequence<T>,
    card: &T,
    games: usize,
    rng: &mut dyn RngCore,
) -> DealPositionHistogram {
    let mut histogram = DealPositionHistogram::new();
    for _ in 0..games {
        let hands = game.deal_all(deck, rng);
        let index = hands.iter().flatten().position(|c| c == card);
        histogram.record(index);
    }
    info!(
        game = game.name(),
        games,
        missing = histogram.missing(),
        "simulation finished"
    );
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_and_shares() {
        let mut h = DealPositionHistogram::new();
        h.record(Some(0));
        h.record(Some(2));
        h.record(Some(2));
        h.record(None);
        assert_eq!(h.games(), 4);
        assert_eq!(h.missing(), 1);
        assert_eq!(h.counts(), &[1, 0, 2]);
        assert_eq!(h.count_at(7), 0);
        assert_eq!(h.share_within(1), 0.25);
        assert_eq!(h.share_within(3), 0.75);
    }

    #[test]
    fn empty_histogram_has_zero_share() {
        assert_eq!(DealPositionHistogram::default().share_within(4), 0.0);
    }
}
