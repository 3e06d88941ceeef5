use rand::RngCore;

use crate::sequence::Sequence;

/// A policy deciding which single card leaves the deck on each deal.
///
/// Dealing from an empty deck returns `(None, deck)`. Dealing from a
/// non-empty deck always yields a card and a deck one card shorter.
///
/// The random source is passed on every call so that strategies which draw
/// positions at random stay reproducible under a seeded generator.
pub trait Dealer<T: Clone> {
    fn deal(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> (Option<T>, Sequence<T>);
}

/// Deals from the top of the deck, i.e. the last position.
///
/// # Examples
///
/// ```
/// use cardplay_engine::dealer::{Dealer, TopDealer};
/// use cardplay_engine::sequence::Sequence;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(0);
/// let deck = Sequence::from(vec![0, 1, 2, 3, 4]);
/// let (card, rest) = TopDealer.deal(&deck, &mut rng);
/// assert_eq!(card, Some(4));
/// assert_eq!(rest.to_vec(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopDealer;

impl<T: Clone> Dealer<T> for TopDealer {
    fn deal(&self, deck: &Sequence<T>, _rng: &mut dyn RngCore) -> (Option<T>, Sequence<T>) {
        deck.remove_last()
    }
}

/// Deals from the bottom of the deck, i.e. position zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BottomDealer;

impl<T: Clone> Dealer<T> for BottomDealer {
    fn deal(&self, deck: &Sequence<T>, _rng: &mut dyn RngCore) -> (Option<T>, Sequence<T>) {
        deck.remove_first()
    }
}
