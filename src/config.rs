//! External configuration loader.
//!
//! Reads `config.toml` from the current directory if present and falls back
//! to built-in defaults for anything missing. Only tuning knobs live here;
//! board dimensions are fixed at build time.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::Tuning;
use crate::types::{FALL_INTERVAL_MS, GROWTH_INTERVAL_MS, INPUT_INTERVAL_MS};

/// Resolved runtime configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub tuning: Tuning,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub music: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            seed: None,
            music: true,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    speed: TomlSpeed,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlSpeed {
    #[serde(default = "default_input_interval")]
    input_interval_ms: u32,
    #[serde(default = "default_fall_interval")]
    fall_interval_ms: u32,
    #[serde(default = "default_growth_interval")]
    growth_interval_ms: u32,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default = "default_music")]
    music: bool,
}

fn default_input_interval() -> u32 {
    INPUT_INTERVAL_MS
}
fn default_fall_interval() -> u32 {
    FALL_INTERVAL_MS
}
fn default_growth_interval() -> u32 {
    GROWTH_INTERVAL_MS
}
fn default_music() -> bool {
    true
}

impl Default for TomlSpeed {
    fn default() -> Self {
        Self {
            input_interval_ms: default_input_interval(),
            fall_interval_ms: default_fall_interval(),
            growth_interval_ms: default_growth_interval(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        Self {
            seed: None,
            music: default_music(),
        }
    }
}

impl Config {
    /// Load `config.toml` next to the process, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let parsed: TomlConfig =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_toml(parsed))
    }

    fn from_toml(toml: TomlConfig) -> Self {
        Self {
            tuning: Tuning {
                input_interval_ms: toml.speed.input_interval_ms.max(1),
                fall_interval_ms: toml.speed.fall_interval_ms.max(1),
                growth_interval_ms: toml.speed.growth_interval_ms.max(1),
            },
            seed: toml.general.seed,
            music: toml.general.music,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.tuning.input_interval_ms, INPUT_INTERVAL_MS);
        assert_eq!(config.tuning.growth_interval_ms, GROWTH_INTERVAL_MS);
        assert!(config.seed.is_none());
        assert!(config.music);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: TomlConfig = toml::from_str(
            r#"
            [speed]
            growth_interval_ms = 1500

            [general]
            seed = 7
            "#,
        )
        .unwrap();
        let config = Config::from_toml(parsed);
        assert_eq!(config.tuning.growth_interval_ms, 1500);
        assert_eq!(config.tuning.fall_interval_ms, FALL_INTERVAL_MS);
        assert_eq!(config.seed, Some(7));
        assert!(config.music);
    }

    #[test]
    fn test_zero_intervals_are_clamped() {
        let parsed: TomlConfig = toml::from_str(
            r#"
            [speed]
            input_interval_ms = 0
            "#,
        )
        .unwrap();
        let config = Config::from_toml(parsed);
        assert_eq!(config.tuning.input_interval_ms, 1);
    }
}
