use serde::{Deserialize, Serialize};
use std::fs;

use crate::cli::ShufflerKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub shuffler: ShufflerKind,
    pub max_shuffles: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub shuffler: ValueSource,
    pub max_shuffles: ValueSource,
    pub limit: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            shuffler: ValueSource::Default,
            max_shuffles: ValueSource::Default,
            limit: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            shuffler: ShufflerKind::Deep,
            max_shuffles: 10,
            limit: 4,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CARDPLAY_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.shuffler {
            cfg.shuffler = v;
            sources.shuffler = ValueSource::File;
        }
        if let Some(v) = f.max_shuffles {
            cfg.max_shuffles = v;
            sources.max_shuffles = ValueSource::File;
        }
        if let Some(v) = f.limit {
            cfg.limit = v;
            sources.limit = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("CARDPLAY_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(shuffler) = std::env::var("CARDPLAY_SHUFFLER")
        && !shuffler.is_empty()
    {
        cfg.shuffler = ShufflerKind::parse(&shuffler)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid shuffler: {}", shuffler)))?;
        sources.shuffler = ValueSource::Env;
    }
    if let Ok(max) = std::env::var("CARDPLAY_MAX_SHUFFLES")
        && !max.is_empty()
    {
        cfg.max_shuffles = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_shuffles".into()))?;
        sources.max_shuffles = ValueSource::Env;
    }
    if let Ok(limit) = std::env::var("CARDPLAY_LIMIT")
        && !limit.is_empty()
    {
        cfg.limit = limit
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid limit".into()))?;
        sources.limit = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    shuffler: Option<ShufflerKind>,
    #[serde(default)]
    max_shuffles: Option<usize>,
    #[serde(default)]
    limit: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_shuffles == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_shuffles must be >=1".into(),
        ));
    }
    if cfg.limit == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: limit must be >=1".into(),
        ));
    }
    Ok(())
}
