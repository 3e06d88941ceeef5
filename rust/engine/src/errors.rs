use thiserror::Error;

/// Rejected construction parameters for games and strategies.
///
/// Bounds on sequence positions are never errors; only configuration that
/// would make a game or strategy meaningless is reported here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A game needs at least one player")]
    ZeroPlayers,
    #[error("A piece-wise game needs at least one round")]
    NoRounds,
    #[error("{rounds} rounds cannot be split evenly among {players} players")]
    UnevenRounds { rounds: usize, players: usize },
    #[error("Human-like shuffling needs max_shuffles >= 1")]
    ZeroMaxShuffles,
    #[error("Trickster limit must be >= 1")]
    ZeroLimit,
}
