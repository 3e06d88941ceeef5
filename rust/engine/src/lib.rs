//! # cardplay-engine: Persistent Decks and Dealing Strategies
//!
//! A deck of cards modelled as an immutable sequence with positional insert
//! and remove, plus pluggable dealing and shuffling strategies and the games
//! built from them. Randomness is always passed in explicitly, so a seeded
//! generator replays every shuffle and deal exactly.
//!
//! ## Core Modules
//!
//! - [`sequence`] - The persistent deck ([`sequence::Sequence`])
//! - [`dealer`] - Dealing strategies (top, bottom)
//! - [`shuffler`] - Shuffling strategies (none, deep, human-like)
//! - [`game`] - Complete-deal games: consecutive, piece-wise (Wiezen), pick
//! - [`trickster`] - A dealer and shuffler colluding to bias the deal
//! - [`simulation`] - Repeated games to measure where a card gets dealt
//! - [`cards`] - The 52-card French deck the games are played with
//! - [`errors`] - Configuration errors
//!
//! ## Quick Start
//!
//! ```rust
//! use cardplay_engine::cards::french_deck;
//! use cardplay_engine::game::{CompleteDealGame, PieceWiseDealGame};
//! use cardplay_engine::shuffler::DeepShuffler;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let wiezen = PieceWiseDealGame::wiezen(&DeepShuffler);
//! let hands = wiezen.deal_all(&french_deck(), &mut rng);
//! assert_eq!(hands.len(), 4);
//! ```
//!
//! ## Total Operations
//!
//! Out-of-range positions never panic:
//!
//! ```rust
//! use cardplay_engine::sequence::Sequence;
//!
//! let empty: Sequence<u8> = Sequence::new();
//! assert_eq!(empty.remove_first(), (None, Sequence::new()));
//! assert_eq!(empty.insert_nth(10, 3).to_vec(), vec![3]);
//! ```

pub mod cards;
pub mod dealer;
pub mod errors;
pub mod game;
pub mod sequence;
pub mod shuffler;
pub mod simulation;
pub mod trickster;
