//! Autoquote configuration

use autoquote_common::{AutoquoteError, Result};
use autoquote_pricing::RandomQuoteIdGenerator;
use serde::{Deserialize, Serialize};

/// Runtime settings for the `autoquote` binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Fixed seed for quote-number generation (reproducible sessions)
    pub id_seed: Option<u64>,
    /// Print JSON instead of text screens
    pub json_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            id_seed: None,
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(level) = var("AUTOQUOTE_LOG") {
            cfg.log_level = level;
        }
        if let Some(seed) = var("AUTOQUOTE_ID_SEED") {
            let seed = seed.trim().parse::<u64>().map_err(|e| {
                AutoquoteError::Config(format!("AUTOQUOTE_ID_SEED is not a u64: {}", e))
            })?;
            cfg.id_seed = Some(seed);
        }
        if let Some(json) = var("AUTOQUOTE_JSON") {
            cfg.json_output = matches!(json.trim(), "1" | "true" | "yes");
        }

        Ok(cfg)
    }

    /// Apply command-line overrides; flags win over the environment
    pub fn with_overrides(mut self, seed: Option<u64>, json: bool) -> Self {
        if seed.is_some() {
            self.id_seed = seed;
        }
        self.json_output |= json;
        self
    }

    /// Quote-number source for this run
    pub fn id_generator(&self) -> RandomQuoteIdGenerator {
        match self.id_seed {
            Some(seed) => RandomQuoteIdGenerator::seeded(seed),
            None => RandomQuoteIdGenerator::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoquote_pricing::QuoteIdGenerator;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_env_values() {
        let env = vars(&[
            ("AUTOQUOTE_LOG", "debug"),
            ("AUTOQUOTE_ID_SEED", " 42 "),
            ("AUTOQUOTE_JSON", "true"),
        ]);
        let cfg = AppConfig::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.id_seed, Some(42));
        assert!(cfg.json_output);
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        let env = vars(&[("AUTOQUOTE_ID_SEED", "abc")]);
        let err = AppConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AutoquoteError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig {
            id_seed: Some(1),
            ..AppConfig::default()
        }
        .with_overrides(Some(9), true);
        assert_eq!(cfg.id_seed, Some(9));
        assert!(cfg.json_output);

        let kept = cfg.clone().with_overrides(None, false);
        assert_eq!(kept.id_seed, Some(9));
        assert!(kept.json_output);
    }

    #[test]
    fn test_seeded_generator_reproducible() {
        let cfg = AppConfig {
            id_seed: Some(5),
            ..AppConfig::default()
        };
        assert_eq!(cfg.id_generator().next_id(), cfg.id_generator().next_id());
    }
}
