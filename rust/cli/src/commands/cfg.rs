//! Configuration command handler.
//!
//! Displays the resolved configuration and where each value came from
//! (default, configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "shuffler": {
//!     "value": "deep",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "shuffler": {
            "value": config.shuffler,
            "source": sources.shuffler,
        },
        "max_shuffles": {
            "value": config.max_shuffles,
            "source": sources.max_shuffles,
        },
        "limit": {
            "value": config.limit,
            "source": sources.limit,
        },
    });
    let rendered = serde_json::to_string_pretty(&display)
        .map_err(|e| CliError::Config(format!("Failed to render configuration: {}", e)))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn cfg_shows_sources() {
        unsafe {
            std::env::remove_var("CARDPLAY_CONFIG");
            std::env::remove_var("CARDPLAY_SEED");
            std::env::remove_var("CARDPLAY_MAX_SHUFFLES");
            std::env::remove_var("CARDPLAY_LIMIT");
            std::env::set_var("CARDPLAY_SHUFFLER", "none");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var("CARDPLAY_SHUFFLER");
        }
        assert!(result.is_ok());

        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["shuffler"]["value"], "none");
        assert_eq!(v["shuffler"]["source"], "env");
        assert_eq!(v["limit"]["value"], 4);
        assert_eq!(v["limit"]["source"], "default");
        assert!(v["seed"]["value"].is_null());
    }

    #[test]
    #[serial]
    fn cfg_reports_invalid_env() {
        unsafe {
            std::env::set_var("CARDPLAY_MAX_SHUFFLES", "many");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var("CARDPLAY_MAX_SHUFFLES");
        }
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("Invalid configuration"));
    }
}
