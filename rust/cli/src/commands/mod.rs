//! Command handler modules for the cardplay CLI.
//!
//! Each command lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via [`crate::error::CliError`]

pub mod cfg;
pub mod deal;
pub mod rng;
pub mod simulate;

pub use cfg::handle_cfg_command;
pub use deal::{GameKind, handle_game_command};
pub use rng::handle_rng_command;
pub use simulate::handle_simulate_command;

use cardplay_engine::cards::{Card, Suit, Value};
use cardplay_engine::shuffler::{DeepShuffler, HumanLikeShuffler, NoShuffler, Shuffler};

use crate::cli::ShufflerKind;
use crate::error::CliError;

/// The card the trickster is after.
pub(crate) fn special_card() -> Card {
    Card::new(Suit::Hearts, Value::Ace)
}

pub(crate) fn build_shuffler(
    kind: ShufflerKind,
    max_shuffles: usize,
) -> Result<Box<dyn Shuffler<Card>>, CliError> {
    Ok(match kind {
        ShufflerKind::None => Box::new(NoShuffler),
        ShufflerKind::Deep => Box::new(DeepShuffler),
        ShufflerKind::Human => Box::new(HumanLikeShuffler::new(max_shuffles)?),
    })
}
