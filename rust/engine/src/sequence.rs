use serde::{Deserialize, Serialize};

/// An immutable ordered collection of cards.
///
/// Every "modifying" operation returns a new sequence and leaves the receiver
/// untouched. Positional operations are total: an index outside the valid
/// range never panics, it either yields no card (removal) or appends
/// (insertion).
///
/// # Examples
///
/// ```
/// use cardplay_engine::sequence::Sequence;
///
/// let deck = Sequence::from(vec![0, 1, 2, 3, 4]);
///
/// let (card, rest) = deck.remove_last();
/// assert_eq!(card, Some(4));
/// assert_eq!(rest.to_vec(), vec![0, 1, 2, 3]);
///
/// // The original deck is unchanged
/// assert_eq!(deck.len(), 5);
///
/// // Out of range removal is a no-op
/// let (card, same) = deck.remove_nth(17);
/// assert_eq!(card, None);
/// assert_eq!(same, deck);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    cards: Vec<T>,
}

impl<T> Sequence<T> {
    /// The empty sequence.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Read-only lookup, `None` when `n` is out of range.
    pub fn peek(&self, n: usize) -> Option<&T> {
        self.cards.get(n)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cards
    }
}

impl<T: Clone> Sequence<T> {
    /// Removes the card at position `n`.
    ///
    /// Returns the removed card together with a sequence holding the remaining
    /// cards in their original relative order. When `n` is not in `[0, len)`
    /// the result is `(None, self)`.
    pub fn remove_nth(&self, n: usize) -> (Option<T>, Sequence<T>) {
        if n >= self.cards.len() {
            return (None, self.clone());
        }
        let mut cards = Vec::with_capacity(self.cards.len() - 1);
        cards.extend_from_slice(&self.cards[..n]);
        cards.extend_from_slice(&self.cards[n + 1..]);
        (Some(self.cards[n].clone()), Sequence { cards })
    }

    pub fn remove_first(&self) -> (Option<T>, Sequence<T>) {
        self.remove_nth(0)
    }

    pub fn remove_last(&self) -> (Option<T>, Sequence<T>) {
        match self.cards.len().checked_sub(1) {
            Some(last) => self.remove_nth(last),
            None => (None, self.clone()),
        }
    }

    /// Inserts `card` so that it ends up at position `n`.
    ///
    /// Subsequent cards shift one place towards the end. An `n` beyond the
    /// length appends.
    pub fn insert_nth(&self, n: usize, card: T) -> Sequence<T> {
        let n = n.min(self.cards.len());
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards[..n]);
        cards.push(card);
        cards.extend_from_slice(&self.cards[n..]);
        Sequence { cards }
    }

    pub fn insert_first(&self, card: T) -> Sequence<T> {
        self.insert_nth(0, card)
    }

    pub fn insert_last(&self, card: T) -> Sequence<T> {
        self.insert_nth(self.cards.len(), card)
    }

    /// Exchanges the cards at `i` and `j`.
    ///
    /// If either index is out of range the copy is returned unchanged.
    pub fn swap(&self, i: usize, j: usize) -> Sequence<T> {
        let mut cards = self.cards.clone();
        if i < cards.len() && j < cards.len() {
            cards.swap(i, j);
        }
        Sequence { cards }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.cards.clone()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(cards: Vec<T>) -> Self {
        Self { cards }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
