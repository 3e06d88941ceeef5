use std::num::NonZeroUsize;

use rand::RngCore;
use tracing::{debug, trace};

use crate::cards::{all_suits, all_values};
use crate::dealer::{Dealer, TopDealer};
use crate::errors::ConfigError;
use crate::sequence::Sequence;
use crate::shuffler::Shuffler;

/// Cards collected by one recipient, in the order they were dealt.
pub type Hand<T> = Vec<T>;

/// One hand per recipient.
pub type AllHands<T> = Vec<Hand<T>>;

/// Per-round deal counts of a Wiezen deal: 4, 5 and 4 cards to each of the
/// four players in turn.
pub const WIEZEN_ROUNDS: [usize; 12] = [4, 4, 4, 4, 5, 5, 5, 5, 4, 4, 4, 4];

/// Number of players at a Wiezen table.
pub const WIEZEN_PLAYERS: usize = 4;

/// Deals up to `n` cards with `dealer`.
///
/// Stops early when the deck runs out, so the hand may hold fewer than `n`
/// cards. Returns the hand in deal order and what is left of the deck.
///
/// # Examples
///
/// ```
/// use cardplay_engine::dealer::BottomDealer;
/// use cardplay_engine::game::deal_n;
/// use cardplay_engine::sequence::Sequence;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(0);
/// let deck = Sequence::from(vec![1, 2, 3]);
/// let (hand, rest) = deal_n(&BottomDealer, &deck, 5, &mut rng);
/// assert_eq!(hand, vec![1, 2, 3]);
/// assert!(rest.is_empty());
/// ```
pub fn deal_n<T: Clone>(
    dealer: &dyn Dealer<T>,
    deck: &Sequence<T>,
    n: usize,
    rng: &mut dyn RngCore,
) -> (Hand<T>, Sequence<T>) {
    let mut hand = Vec::with_capacity(n.min(deck.len()));
    let mut source = deck.clone();
    while hand.len() < n {
        match dealer.deal(&source, rng) {
            (Some(card), rest) => {
                hand.push(card);
                source = rest;
            }
            (None, _) => break,
        }
    }
    trace!(dealt = hand.len(), left = source.len(), "dealt cards");
    (hand, source)
}

/// Regroups round-major hands into one hand per player.
///
/// Round `i` belongs to player `i % players`; each player's rounds are
/// concatenated in the order they were dealt. This is the same as splitting
/// the rounds into batches of `players`, transposing every batch and joining
/// each player's partial hands.
pub fn regroup<T>(rounds: AllHands<T>, players: NonZeroUsize) -> AllHands<T> {
    let players = players.get();
    let mut hands: AllHands<T> = (0..players).map(|_| Vec::new()).collect();
    for (i, round) in rounds.into_iter().enumerate() {
        hands[i % players].extend(round);
    }
    hands
}

/// A game that partitions the whole deck into hands in one go.
pub trait CompleteDealGame<T: Clone> {
    /// Short name used in deal records.
    fn name(&self) -> &str;

    fn deal_all(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> AllHands<T>;
}

/// Shuffles once, then deals `hands` consecutive hands of `cards_per_hand`.
pub struct ConsecutiveDealGame<'a, T> {
    dealer: &'a dyn Dealer<T>,
    shuffler: &'a dyn Shuffler<T>,
    hands: usize,
    cards_per_hand: usize,
}

impl<'a, T: Clone> ConsecutiveDealGame<'a, T> {
    pub fn new(
        dealer: &'a dyn Dealer<T>,
        shuffler: &'a dyn Shuffler<T>,
        hands: usize,
        cards_per_hand: usize,
    ) -> Result<Self, ConfigError> {
        if hands == 0 {
            return Err(ConfigError::ZeroPlayers);
        }
        Ok(Self {
            dealer,
            shuffler,
            hands,
            cards_per_hand,
        })
    }

    /// One hand per suit, one card per value: the whole French deck.
    pub fn french(dealer: &'a dyn Dealer<T>, shuffler: &'a dyn Shuffler<T>) -> Self {
        Self {
            dealer,
            shuffler,
            hands: all_suits().len(),
            cards_per_hand: all_values().len(),
        }
    }
}

impl<T: Clone> CompleteDealGame<T> for ConsecutiveDealGame<'_, T> {
    fn name(&self) -> &str {
        "consecutive"
    }

    fn deal_all(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> AllHands<T> {
        let mut source = self.shuffler.shuffle(deck, rng);
        let mut hands = Vec::with_capacity(self.hands);
        for _ in 0..self.hands {
            let (hand, rest) = deal_n(self.dealer, &source, self.cards_per_hand, rng);
            hands.push(hand);
            source = rest;
        }
        debug!(hands = hands.len(), left = source.len(), "consecutive deal done");
        hands
    }
}

/// Deals in rounds of varying size and reassembles the rounds per player.
///
/// Round `i` deals `counts[i]` cards into a fresh round-hand. The round-hands
/// are then [`regroup`]ed so that every player ends up with one hand holding
/// their cards from all rounds.
///
/// # Examples
///
/// ```
/// use cardplay_engine::cards::french_deck;
/// use cardplay_engine::game::{CompleteDealGame, PieceWiseDealGame};
/// use cardplay_engine::shuffler::DeepShuffler;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let wiezen = PieceWiseDealGame::wiezen(&DeepShuffler);
/// let hands = wiezen.deal_all(&french_deck(), &mut rng);
/// assert_eq!(hands.len(), 4);
/// assert!(hands.iter().all(|h| h.len() == 13));
/// ```
pub struct PieceWiseDealGame<'a, T> {
    dealer: &'a dyn Dealer<T>,
    shuffler: &'a dyn Shuffler<T>,
    counts: Vec<usize>,
    players: NonZeroUsize,
}

impl<'a, T: Clone> PieceWiseDealGame<'a, T> {
    pub fn new(
        dealer: &'a dyn Dealer<T>,
        shuffler: &'a dyn Shuffler<T>,
        counts: Vec<usize>,
        players: usize,
    ) -> Result<Self, ConfigError> {
        let players = NonZeroUsize::new(players).ok_or(ConfigError::ZeroPlayers)?;
        if counts.is_empty() {
            return Err(ConfigError::NoRounds);
        }
        if counts.len() % players.get() != 0 {
            return Err(ConfigError::UnevenRounds {
                rounds: counts.len(),
                players: players.get(),
            });
        }
        Ok(Self {
            dealer,
            shuffler,
            counts,
            players,
        })
    }

    /// The Wiezen deal: 4, 5, 4 cards per player dealt from the top.
    pub fn wiezen(shuffler: &'a dyn Shuffler<T>) -> Self
    where
        T: 'a,
    {
        Self {
            dealer: &TopDealer,
            shuffler,
            counts: WIEZEN_ROUNDS.to_vec(),
            players: NonZeroUsize::new(WIEZEN_PLAYERS).unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn players(&self) -> usize {
        self.players.get()
    }

    /// Shuffles and deals one round-hand per count, in round order.
    pub fn deal_rounds(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> AllHands<T> {
        let mut source = self.shuffler.shuffle(deck, rng);
        let mut rounds = Vec::with_capacity(self.counts.len());
        for &count in &self.counts {
            let (hand, rest) = deal_n(self.dealer, &source, count, rng);
            rounds.push(hand);
            source = rest;
        }
        rounds
    }
}

impl<T: Clone> CompleteDealGame<T> for PieceWiseDealGame<'_, T> {
    fn name(&self) -> &str {
        "piece-wise"
    }

    fn deal_all(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> AllHands<T> {
        let rounds = self.deal_rounds(deck, rng);
        debug!(
            rounds = rounds.len(),
            players = self.players.get(),
            "regrouping piece-wise deal"
        );
        regroup(rounds, self.players)
    }
}

/// Shuffles and deals the whole deck into a single hand.
///
/// The hand shows the order in which the dealer picked the cards, which is
/// what a picking game (or a cheat) cares about.
pub struct PickGame<'a, T> {
    dealer: &'a dyn Dealer<T>,
    shuffler: &'a dyn Shuffler<T>,
}

impl<'a, T: Clone> PickGame<'a, T> {
    pub fn new(dealer: &'a dyn Dealer<T>, shuffler: &'a dyn Shuffler<T>) -> Self {
        Self { dealer, shuffler }
    }
}

impl<T: Clone> CompleteDealGame<T> for PickGame<'_, T> {
    fn name(&self) -> &str {
        "pick"
    }

    fn deal_all(&self, deck: &Sequence<T>, rng: &mut dyn RngCore) -> AllHands<T> {
        let shuffled = self.shuffler.shuffle(deck, rng);
        let (hand, _) = deal_n(self.dealer, &shuffled, shuffled.len(), rng);
        vec![hand]
    }
}
