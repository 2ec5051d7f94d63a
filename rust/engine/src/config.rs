use std::fs;

use serde::Deserialize;

use crate::deck::Deck;
use crate::errors::ConfigError;

/// Path of an optional TOML file holding deck settings.
pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
/// Overrides the shuffle seed from the environment.
pub const SEED_ENV: &str = "HOLDEM_SEED";

/// Settings used when constructing a [`Deck`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeckConfig {
    /// Fixed shuffle seed; `None` draws fresh randomness per deck
    #[serde(default)]
    pub seed: Option<u64>,
}

impl DeckConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Resolves settings from the config file named by `HOLDEM_CONFIG`,
    /// then applies `HOLDEM_SEED` on top.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => {
                let s = fs::read_to_string(&path)?;
                tracing::debug!(path = %path, "loaded deck config file");
                Self::from_toml_str(&s)?
            }
            _ => Self::default(),
        };

        if let Ok(seed) = std::env::var(SEED_ENV) {
            if !seed.is_empty() {
                cfg.seed = Some(seed.trim().parse().map_err(|_| {
                    ConfigError::Invalid(format!("{SEED_ENV} must be an unsigned integer, got {seed:?}"))
                })?);
            }
        }
        Ok(cfg)
    }

    pub fn build_deck(&self) -> Deck {
        match self.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        }
    }
}
