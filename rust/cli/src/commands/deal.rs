//! Game commands: deal Wiezen, consecutive, bonafide and tricky games.
//!
//! Every game is dealt from a fresh French deck. One ChaCha20 generator is
//! seeded per invocation and drives all `--rounds` deals, so the same seed
//! prints the same deals.

use std::io::Write;

use cardplay_engine::cards::{Card, french_deck};
use cardplay_engine::dealer::TopDealer;
use cardplay_engine::game::{
    AllHands, CompleteDealGame, ConsecutiveDealGame, PickGame, PieceWiseDealGame,
};
use cardplay_engine::trickster::Trickster;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::{build_shuffler, special_card};
use crate::cli::{GameOpts, ShufflerKind};
use crate::config::{self, Config};
use crate::deal_log::DealLog;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use crate::ui;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameKind {
    Wiezen,
    Consecutive,
    Bonafide,
    Tricky,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Wiezen => "wiezen",
            GameKind::Consecutive => "consecutive",
            GameKind::Bonafide => "bonafide",
            GameKind::Tricky => "tricky",
        }
    }

    fn is_pick(&self) -> bool {
        matches!(self, GameKind::Bonafide | GameKind::Tricky)
    }
}

/// Configuration after command-line flags have been applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GameSettings {
    pub seed: u64,
    pub shuffler: ShufflerKind,
    pub max_shuffles: usize,
    pub limit: usize,
}

pub(crate) fn resolve_settings(opts: &GameOpts, cfg: &Config) -> Result<GameSettings, CliError> {
    let max_shuffles = match opts.max_shuffles {
        Some(v) => usize::try_from(v)
            .map_err(|_| CliError::InvalidInput(format!("max-shuffles out of range: {}", v)))?,
        None => cfg.max_shuffles,
    };
    Ok(GameSettings {
        seed: opts.seed.or(cfg.seed).unwrap_or_else(rand::random),
        shuffler: opts.shuffler.unwrap_or(cfg.shuffler),
        max_shuffles,
        limit: cfg.limit,
    })
}

/// Handle a game command.
///
/// Deals `opts.rounds` games and prints every hand. With `--output`, each
/// deal is also appended to a JSONL deal log.
pub fn handle_game_command(
    kind: GameKind,
    opts: &GameOpts,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let settings = resolve_settings(opts, &cfg)?;

    if kind == GameKind::Tricky && opts.shuffler.is_some() {
        ui::display_warning(err, "tricky shuffles its own deck; --shuffler is ignored")?;
    }

    let shuffler = build_shuffler(settings.shuffler, settings.max_shuffles)?;
    let trickster = Trickster::new(special_card(), settings.limit)?;
    let game: Box<dyn CompleteDealGame<Card> + '_> = match kind {
        GameKind::Wiezen => Box::new(PieceWiseDealGame::wiezen(shuffler.as_ref())),
        GameKind::Consecutive => {
            Box::new(ConsecutiveDealGame::french(&TopDealer, shuffler.as_ref()))
        }
        GameKind::Bonafide => Box::new(PickGame::new(&TopDealer, shuffler.as_ref())),
        GameKind::Tricky => Box::new(PickGame::new(&trickster, &trickster)),
    };

    let mut log = match &opts.output {
        Some(path) => Some(DealLog::open(path)?),
        None => None,
    };

    let mut rng = ChaCha20Rng::seed_from_u64(settings.seed);
    let deck = french_deck();
    let shuffler_name = match kind {
        GameKind::Tricky => "trickster",
        _ => settings.shuffler.as_str(),
    };
    writeln!(
        out,
        "Game: {} (seed {}, shuffler {})",
        kind.as_str(),
        settings.seed,
        shuffler_name
    )?;

    for round in 1..=opts.rounds {
        let hands = game.deal_all(&deck, &mut rng);
        write_deal(kind, round, &hands, out)?;

        if let Some(log) = log.as_mut() {
            let meta = serde_json::json!({
                "command": kind.as_str(),
                "round": round,
                "shuffler": shuffler_name,
            });
            log.append(game.name(), settings.seed, hands, meta)?;
        }
    }
    Ok(())
}

fn write_deal(
    kind: GameKind,
    round: u64,
    hands: &AllHands<Card>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "Deal {}:", round)?;
    for (i, hand) in hands.iter().enumerate() {
        writeln!(out, "  Hand {}: {}", i + 1, format_hand(hand))?;
    }
    if kind.is_pick() {
        let special = special_card();
        match hands.iter().flatten().position(|c| *c == special) {
            Some(at) => writeln!(out, "  {} dealt as card {}", format_card(&special), at + 1)?,
            None => writeln!(out, "  {} not dealt", format_card(&special))?,
        }
    }
    Ok(())
}
