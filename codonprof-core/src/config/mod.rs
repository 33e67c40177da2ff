//! Configuration types for codonprof

use crate::CodonError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How raw sequence triplets are normalized before table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Accept lowercase nucleotides by folding them to uppercase
    #[serde(default = "default_fold_case")]
    pub fold_case: bool,
    /// Accept DNA input by reading `T` as `U`
    #[serde(default = "default_dna_input")]
    pub dna_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when neither CODONPROF_LOG nor RUST_LOG is set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_fold_case() -> bool { true }
fn default_dna_input() -> bool { true }
fn default_level() -> String { "warn".to_string() }

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            fold_case: default_fold_case(),
            dna_input: default_dna_input(),
        }
    }
}

impl TranslationConfig {
    /// Only exact uppercase RNA triplets are accepted
    pub fn strict() -> Self {
        Self {
            fold_case: false,
            dna_input: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, CodonError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| CodonError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), CodonError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CodonError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
