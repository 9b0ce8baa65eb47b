use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::matching::ranker::RankingMode;

/// Which normalization strategy main constructs at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizerKind {
    Simple,
    Stemmed,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub normalizer: NormalizerKind,
    pub ranking_mode: RankingMode,
    pub max_catalog_bytes: u64,
}

const DEFAULT_MAX_CATALOG_BYTES: u64 = 16 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalog_path: PathBuf::from(require_env("CATALOG_PATH")?),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            normalizer: parse_normalizer(
                &std::env::var("SKILL_NORMALIZER").unwrap_or_else(|_| "simple".to_string()),
            )?,
            ranking_mode: parse_ranking_mode(
                &std::env::var("RANKING_MODE").unwrap_or_else(|_| "tiered".to_string()),
            )?,
            max_catalog_bytes: std::env::var("MAX_CATALOG_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_CATALOG_BYTES.to_string())
                .parse::<u64>()
                .context("MAX_CATALOG_BYTES must be a byte count")?,
        })
    }
}

fn parse_normalizer(raw: &str) -> Result<NormalizerKind> {
    match raw.to_lowercase().as_str() {
        "simple" => Ok(NormalizerKind::Simple),
        "stemmed" => Ok(NormalizerKind::Stemmed),
        other => bail!("SKILL_NORMALIZER must be 'simple' or 'stemmed', got '{other}'"),
    }
}

fn parse_ranking_mode(raw: &str) -> Result<RankingMode> {
    match raw.to_lowercase().as_str() {
        "flat" => Ok(RankingMode::Flat),
        "tiered" => Ok(RankingMode::Tiered),
        other => bail!("RANKING_MODE must be 'flat' or 'tiered', got '{other}'"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizer_values() {
        assert_eq!(parse_normalizer("simple").unwrap(), NormalizerKind::Simple);
        assert_eq!(parse_normalizer("Stemmed").unwrap(), NormalizerKind::Stemmed);
        assert!(parse_normalizer("semantic").is_err());
    }

    #[test]
    fn test_parse_ranking_mode_values() {
        assert_eq!(parse_ranking_mode("flat").unwrap(), RankingMode::Flat);
        assert_eq!(parse_ranking_mode("TIERED").unwrap(), RankingMode::Tiered);
        assert!(parse_ranking_mode("grouped").is_err());
    }
}
