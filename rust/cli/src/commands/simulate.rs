//! Simulation command: how early does the trickster deal the Ace of Hearts?
//!
//! Plays many pick games with the trickster as dealer and shuffler, and
//! optionally the same number with an honest top dealer, then prints the
//! histogram of the deal at which the Ace of Hearts came out.

use std::io::Write;

use cardplay_engine::cards::{Card, french_deck};
use cardplay_engine::dealer::TopDealer;
use cardplay_engine::game::PickGame;
use cardplay_engine::simulation::{DealPositionHistogram, special_card_positions};
use cardplay_engine::trickster::Trickster;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::{build_shuffler, special_card};
use crate::config;
use crate::error::CliError;
use crate::formatters::format_card;

/// Handle the simulate command.
///
/// `limit` and, for the honest comparison, the shuffler come from the
/// configuration. The seed flag overrides the configured seed.
pub fn handle_simulate_command(
    games: usize,
    seed: Option<u64>,
    honest: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".into()));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let deck = french_deck();
    let trickster = Trickster::new(special_card(), cfg.limit)?;
    let special = trickster.special();
    let limit = trickster.limit();

    writeln!(
        out,
        "Simulated {} games (seed {}, limit {})",
        games, seed, limit
    )?;

    let tricky = PickGame::new(&trickster, &trickster);
    let histogram = special_card_positions(&tricky, &deck, special, games, &mut rng);
    write_histogram(out, "tricky", special, &histogram, limit)?;

    if honest {
        let shuffler = build_shuffler(cfg.shuffler, cfg.max_shuffles)?;
        let bonafide = PickGame::new(&TopDealer, shuffler.as_ref());
        let histogram = special_card_positions(&bonafide, &deck, special, games, &mut rng);
        write_histogram(out, "bonafide", special, &histogram, limit)?;
    }
    Ok(())
}

fn write_histogram(
    out: &mut dyn Write,
    label: &str,
    card: &Card,
    histogram: &DealPositionHistogram,
    limit: usize,
) -> Result<(), CliError> {
    let games = histogram.games().max(1) as f64;
    writeln!(
        out,
        "{}: {} within the first {} deals in {:.2}% of games",
        label,
        format_card(card),
        limit,
        histogram.share_within(limit) * 100.0
    )?;
    for i in 0..limit {
        let count = histogram.count_at(i);
        writeln!(
            out,
            "  deal {:>2}: {:>7} ({:.2}%)",
            i + 1,
            count,
            count as f64 / games * 100.0
        )?;
    }
    if histogram.missing() > 0 {
        writeln!(out, "  not dealt: {}", histogram.missing())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_lines_cover_limit() {
        let mut h = DealPositionHistogram::new();
        h.record(Some(0));
        h.record(Some(1));
        h.record(None);
        let mut out = Vec::new();
        write_histogram(&mut out, "tricky", &special_card(), &h, 3).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("tricky:"));
        assert!(s.contains("deal  1:"));
        assert!(s.contains("deal  3:"));
        assert!(s.contains("not dealt: 1"));
    }

    #[test]
    fn zero_games_is_invalid() {
        let mut out = Vec::new();
        let result = handle_simulate_command(0, Some(1), false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
