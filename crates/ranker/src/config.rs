//! Optional per-directory configuration.
//!
//! A `.ranker.toml` next to the ranked files can set session defaults.
//! All fields are optional and CLI flags override config values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file name inside the target directory.
pub const CONFIG_FILE: &str = ".ranker.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Comma-separated extension filter, e.g. "md,txt".
    pub extensions: Option<String>,
    /// Games-played balancing exponent for first-pick selection.
    pub power: Option<f64>,
    /// Default `top` leaderboard size.
    pub leaderboard_size: Option<usize>,
}

impl Config {
    /// Load the config for `dir`. A missing file means all defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.extensions.is_none());
        assert!(config.power.is_none());
        assert!(config.leaderboard_size.is_none());
    }

    #[test]
    fn config_fields_parse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "extensions = \"md,txt\"\npower = 1.5\nleaderboard_size = 25\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.extensions.as_deref(), Some("md,txt"));
        assert_eq!(config.power, Some(1.5));
        assert_eq!(config.leaderboard_size, Some(25));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "power = \"fast\"").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
