use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::modules::queue_ingest::use_cases::drain_queue::handler::{
    DEFAULT_BATCH_SIZE, DEFAULT_IDLE_INTERVAL,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{0} is required when STORAGE_BACKEND=aws")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Local HTTP server, optionally with the queue drainer in the background.
    Server,
    /// Queue drainer only.
    Consumer,
    /// Router served through the Lambda runtime.
    Lambda,
}

impl FromStr for RunMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "server" => Ok(Self::Server),
            "consumer" => Ok(Self::Consumer),
            "lambda" => Ok(Self::Lambda),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Aws,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "aws" => Ok(Self::Aws),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub run_mode: RunMode,
    pub backend: StorageBackend,
    pub flags_table: String,
    pub pastes_table: String,
    pub articles_table: String,
    pub messages_table: String,
    pub queue_url: Option<String>,
    pub paste_max_bytes: usize,
    pub consumer_enabled: bool,
    pub consumer_batch_size: i32,
    pub consumer_idle_interval: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_mode = if lookup("AWS_LAMBDA_RUNTIME_API").is_some() {
            RunMode::Lambda
        } else {
            RunMode::Server
        };
        let backend = parse_or(&lookup, "STORAGE_BACKEND", StorageBackend::Memory)?;
        let queue_url = lookup("QUEUE_URL").filter(|v| !v.trim().is_empty());
        if backend == StorageBackend::Aws && queue_url.is_none() {
            return Err(ConfigError::Missing("QUEUE_URL"));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            run_mode: parse_or(&lookup, "RUN_MODE", default_mode)?,
            backend,
            flags_table: lookup("FLAGS_TABLE").unwrap_or_else(|| "feature-flags".to_string()),
            pastes_table: lookup("PASTES_TABLE").unwrap_or_else(|| "pastes".to_string()),
            articles_table: lookup("ARTICLES_TABLE").unwrap_or_else(|| "articles".to_string()),
            messages_table: lookup("MESSAGES_TABLE")
                .unwrap_or_else(|| "ingested-messages".to_string()),
            queue_url,
            paste_max_bytes: parse_or(&lookup, "PASTE_MAX_BYTES", 64 * 1024)?,
            consumer_enabled: parse_or(&lookup, "CONSUMER_ENABLED", true)?,
            consumer_batch_size: parse_or(&lookup, "CONSUMER_BATCH_SIZE", DEFAULT_BATCH_SIZE)?,
            consumer_idle_interval: Duration::from_secs(parse_or(
                &lookup,
                "CONSUMER_IDLE_SECS",
                DEFAULT_IDLE_INTERVAL.as_secs(),
            )?),
            log_format: parse_or(&lookup, "LOG_FORMAT", LogFormat::Compact)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
