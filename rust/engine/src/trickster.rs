use std::cell::Cell;

use rand::{Rng, RngCore};
use tracing::{debug, warn};

use crate::dealer::Dealer;
use crate::errors::ConfigError;
use crate::sequence::Sequence;
use crate::shuffler::Shuffler;

/// A dealer and shuffler in one, colluding through shared hidden state.
///
/// While shuffling, the trickster keeps track of where one designated card
/// ends up. While dealing, it picks positions at random but, with a chance
/// that grows by `1 / limit` on every deal, takes the designated card
/// instead. The designated card is therefore dealt within the first `limit`
/// deals, while the deck still looks randomly shuffled and dealt.
///
/// The card is tracked by position, not by value: the first instance equal
/// to the designated card at shuffle time is followed, any later duplicate is
/// just another card.
///
/// State lives in [`Cell`]s so the same value can act as dealer and as
/// shuffler of one game at once. That also makes the trickster `!Sync`: it
/// belongs to a single game session.
///
/// # Examples
///
/// ```
/// use cardplay_engine::game::{CompleteDealGame, PickGame};
/// use cardplay_engine::sequence::Sequence;
/// use cardplay_engine::trickster::Trickster;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let trickster = Trickster::new(0u32, 4).unwrap();
/// let game = PickGame::new(&trickster, &trickster);
/// let deck: Sequence<u32> = (0..52).collect();
/// let hand = &game.deal_all(&deck, &mut rng)[0];
/// let dealt_at = hand.iter().position(|&c| c == 0).unwrap();
/// assert!(dealt_at < 4);
/// ```
#[derive(Debug)]
pub struct Trickster<T> {
    special: T,
    limit: usize,
    deals: Cell<usize>,
    // None once the special card has been dealt, or when it is not in the deck
    special_position: Cell<Option<usize>>,
    cycle: Cell<usize>,
}

impl<T> Trickster<T> {
    pub fn new(special: T, limit: usize) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(Self {
            special,
            limit,
            deals: Cell::new(0),
            special_position: Cell::new(None),
            cycle: Cell::new(0),
        })
    }

    pub fn special(&self) -> &T {
        &self.special
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn reset(&self) {
        self.deals.set(0);
        self.special_position.set(None);
        self.cycle.set(0);
    }
}

impl<T: Clone + PartialEq> Shuffler<T> for Trickster<T> {
    /// Swap-based shuffle that follows the special card as it moves.
    fn shuffle(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> Sequence<T> {
        let mut cards = deck.to_vec();
        let mut tracked = cards.iter().position(|c| *c == self.special);
        if tracked.is_none() {
            warn!("special card is not in the deck; dealing at random");
        }
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
            tracked = tracked.map(|p| match p {
                p if p == i => j,
                p if p == j => i,
                p => p,
            });
        }
        self.deals.set(0);
        self.special_position.set(tracked);
        self.cycle.set(cards.len());
        debug!(position = ?tracked, cycle = cards.len(), "trickster shuffled");
        Sequence::from(cards)
    }
}

impl<T: Clone + PartialEq> Dealer<T> for Trickster<T> {
    fn deal(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> (Option<T>, Sequence<T>) {
        if deck.is_empty() {
            return (None, deck.clone());
        }
        let deals = self.deals.get() + 1;
        self.deals.set(deals);

        // A position outside the deck means someone else dealt from it; give up.
        let tracked = self.special_position.get().filter(|&p| p < deck.len());
        let odds = deals as f64 / self.limit as f64;
        let position = match tracked {
            Some(special) if rng.random::<f64>() < odds => {
                debug!(deals, special, "trickster forces special card");
                self.special_position.set(None);
                special
            }
            _ => {
                let pick = rng.random_range(0..deck.len());
                self.special_position.set(match tracked {
                    Some(special) if pick < special => Some(special - 1),
                    Some(special) if pick == special => None,
                    other => other,
                });
                pick
            }
        };

        if deals == self.cycle.get() {
            self.reset();
        }
        deck.remove_nth(position)
    }
}
