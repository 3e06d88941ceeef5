//! Command-line surface: the parser and its subcommands.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "cardplay",
    version,
    about = "Deal card games with pluggable dealers and shufflers"
)]
pub struct CardplayCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal Wiezen: 4 players, rounds of 4, 5 and 4 cards
    Wiezen(GameOpts),
    /// Deal the deck consecutively into one hand per suit
    Consecutive(GameOpts),
    /// Pick game with an honest top dealer
    Bonafide(GameOpts),
    /// Pick game with the trickster as dealer and shuffler
    Tricky(GameOpts),
    /// Measure at which deal the Ace of Hearts comes out
    Simulate {
        #[arg(long, default_value_t = 10_000)]
        games: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Compare against the honest pick game
        #[arg(long)]
        honest: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Print a sample from the seeded generator
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options shared by the game commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GameOpts {
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum)]
    pub shuffler: Option<ShufflerKind>,
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_shuffles: Option<u64>,
    /// Number of deals to print
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub rounds: u64,
    /// Append deal records to this JSONL file, creating it if needed
    #[arg(long)]
    pub output: Option<String>,
}

/// Which shuffling strategy a game uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShufflerKind {
    /// Leave the deck in order
    None,
    /// Uniformly random permutation
    Deep,
    /// A few packet cuts, like a person would do
    Human,
}

impl ShufflerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShufflerKind::None => "none",
            ShufflerKind::Deep => "deep",
            ShufflerKind::Human => "human",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(ShufflerKind::None),
            "deep" => Some(ShufflerKind::Deep),
            "human" => Some(ShufflerKind::Human),
            _ => None,
        }
    }
}
