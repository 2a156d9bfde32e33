use std::{env, fmt::Display, ops::RangeInclusive, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Accepted token lifetimes, in hours: at least one hour, at most a year.
pub const TOKEN_TTL_RANGE: RangeInclusive<i64> = 1..=8760;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub token_secret: String,
    pub token_ttl_hours: i64,
    pub production: bool,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parse_or("PORT", "5000")?,
            database_url: required("DATABASE_URL")?,
            database_name: var_or("DATABASE_NAME", "foodsDB"),
            token_secret: required("ACCESS_TOKEN_SECRET")?,
            token_ttl_hours: token_ttl_hours(parse_or("TOKEN_TTL_HOURS", "10")?)?,
            production: var_or("APP_ENV", "development").eq_ignore_ascii_case("production"),
            allowed_origins: split_origins(&var_or("ALLOWED_ORIGINS", "http://localhost:5173")),
        })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::debug!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

fn parse_or<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var_or(key, default)
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}

fn token_ttl_hours(hours: i64) -> Result<i64, ConfigError> {
    if TOKEN_TTL_RANGE.contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::Invalid {
            key: "TOKEN_TTL_HOURS",
            reason: format!(
                "{} is outside {}..={}",
                hours,
                TOKEN_TTL_RANGE.start(),
                TOKEN_TTL_RANGE.end()
            ),
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
