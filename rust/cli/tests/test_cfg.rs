//! Configuration through `CARDPLAY_*` variables and a TOML file, driven
//! through the CLI entry point.

use cardplay_cli::run;
use serial_test::serial;

const VARS: [&str; 5] = [
    "CARDPLAY_CONFIG",
    "CARDPLAY_SEED",
    "CARDPLAY_SHUFFLER",
    "CARDPLAY_MAX_SHUFFLES",
    "CARDPLAY_LIMIT",
];

fn clear_env() {
    for key in VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn file_values_are_used_and_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardplay.toml");
    std::fs::write(&path, "seed = 3\nshuffler = \"none\"\nlimit = 2\n").unwrap();
    unsafe {
        std::env::set_var("CARDPLAY_CONFIG", &path);
    }

    let (code, out, _) = run_capture(&["cardplay", "cfg"]);
    let (game_code, game_out, _) = run_capture(&["cardplay", "consecutive"]);
    clear_env();

    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["seed"]["value"], 3);
    assert_eq!(v["seed"]["source"], "file");
    assert_eq!(v["limit"]["value"], 2);
    assert_eq!(v["max_shuffles"]["source"], "default");

    assert_eq!(game_code, 0);
    assert!(game_out.starts_with("Game: consecutive (seed 3, shuffler none)"));
    assert!(game_out.contains("Hand 1: [K♣ Q♣"));
}

#[test]
#[serial]
fn env_seed_matches_seed_flag() {
    clear_env();
    unsafe {
        std::env::set_var("CARDPLAY_SEED", "42");
    }
    let (_, from_env, _) = run_capture(&["cardplay", "wiezen"]);
    clear_env();
    let (_, from_flag, _) = run_capture(&["cardplay", "wiezen", "--seed", "42"]);
    assert_eq!(from_env, from_flag);
}

#[test]
#[serial]
fn flag_overrides_env_shuffler() {
    clear_env();
    unsafe {
        std::env::set_var("CARDPLAY_SHUFFLER", "deep");
    }
    let (code, out, _) = run_capture(&["cardplay", "wiezen", "--seed", "1", "--shuffler", "none"]);
    clear_env();
    assert_eq!(code, 0);
    assert!(out.contains("shuffler none"));
}

#[test]
#[serial]
fn zero_limit_fails_fast() {
    clear_env();
    unsafe {
        std::env::set_var("CARDPLAY_LIMIT", "0");
    }
    let (code, out, err) = run_capture(&["cardplay", "tricky", "--seed", "1"]);
    let (cfg_code, _, cfg_err) = run_capture(&["cardplay", "cfg"]);
    clear_env();

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error"), "{err}");
    assert_eq!(cfg_code, 2);
    assert!(cfg_err.contains("Invalid configuration"));
}

#[test]
#[serial]
fn smaller_limit_tightens_the_trickster() {
    clear_env();
    unsafe {
        std::env::set_var("CARDPLAY_LIMIT", "1");
    }
    let (code, out, _) = run_capture(&["cardplay", "tricky", "--seed", "8", "--rounds", "20"]);
    clear_env();
    assert_eq!(code, 0);
    let firsts = out
        .lines()
        .filter(|l| l.trim() == "A♥ dealt as card 1")
        .count();
    assert_eq!(firsts, 20);
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    clear_env();
    unsafe {
        std::env::set_var("CARDPLAY_CONFIG", "/nonexistent/cardplay.toml");
    }
    let (code, _, err) = run_capture(&["cardplay", "wiezen"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
}
