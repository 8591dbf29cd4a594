use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Root for the uploads/, charts/ and reports/ directories.
    pub data_dir: PathBuf,
    /// Base URL of a LanguageTool server, e.g. `http://localhost:8081`.
    pub languagetool_url: String,
    pub grammar_language: String,
    pub grammar_timeout: Duration,
    pub max_upload_bytes: usize,
    pub artifact_ttl: Duration,
    pub cleanup_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            languagetool_url: require_env("LANGUAGETOOL_URL")?,
            grammar_language: std::env::var("GRAMMAR_LANGUAGE")
                .unwrap_or_else(|_| "en-US".to_string()),
            grammar_timeout: Duration::from_secs(parse_env("GRAMMAR_TIMEOUT_SECS", 30)?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            artifact_ttl: Duration::from_secs(parse_env("ARTIFACT_TTL_SECS", 86_400)?),
            cleanup_interval: Duration::from_secs(parse_env("CLEANUP_INTERVAL_SECS", 3_600)?),
        };

        anyhow::ensure!(
            !config.cleanup_interval.is_zero(),
            "CLEANUP_INTERVAL_SECS must be greater than zero"
        );
        Ok(config)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("ANALYZER_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("ANALYZER_TEST_BAD_NUMBER", "forty-two");
        let result: Result<u16> = parse_env("ANALYZER_TEST_BAD_NUMBER", 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("ANALYZER_TEST_GOOD_NUMBER", " 9090 ");
        let port: u16 = parse_env("ANALYZER_TEST_GOOD_NUMBER", 8080).unwrap();
        assert_eq!(port, 9090);
    }
}
