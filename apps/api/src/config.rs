use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Tick between revealed characters of a bot reply.
    pub reveal_interval: Duration,
    /// Number used for the contact redirect and the floating widget.
    pub whatsapp_number: String,
    /// Ad-network client id. No ad embed is produced when unset.
    pub adsense_client: Option<String>,
    pub widget_reply_time: String,
    /// Sessions untouched for this long are dropped.
    pub session_idle_ttl: Duration,
    pub session_sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            reveal_interval: Duration::from_millis(50),
            whatsapp_number: "2349158547128".to_string(),
            adsense_client: None,
            widget_reply_time: "I reply fast!".to_string(),
            session_idle_ttl: Duration::from_secs(30 * 60),
            session_sweep_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            reveal_interval: match std::env::var("REVEAL_INTERVAL_MS") {
                Ok(raw) => parse_reveal_interval(&raw)?,
                Err(_) => defaults.reveal_interval,
            },
            whatsapp_number: std::env::var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            adsense_client: optional_env("ADSENSE_CLIENT"),
            widget_reply_time: std::env::var("WIDGET_REPLY_TIME")
                .unwrap_or(defaults.widget_reply_time),
            session_idle_ttl: match std::env::var("SESSION_IDLE_TTL_SECS") {
                Ok(raw) => parse_secs("SESSION_IDLE_TTL_SECS", &raw)?,
                Err(_) => defaults.session_idle_ttl,
            },
            session_sweep_interval: match std::env::var("SESSION_SWEEP_INTERVAL_SECS") {
                Ok(raw) => parse_secs("SESSION_SWEEP_INTERVAL_SECS", &raw)?,
                Err(_) => defaults.session_sweep_interval,
            },
        })
    }
}

fn parse_reveal_interval(raw: &str) -> Result<Duration> {
    let millis = raw
        .trim()
        .parse::<u64>()
        .context("REVEAL_INTERVAL_MS must be a whole number of milliseconds")?;
    anyhow::ensure!(millis > 0, "REVEAL_INTERVAL_MS must be greater than zero");
    Ok(Duration::from_millis(millis))
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds"))?;
    anyhow::ensure!(secs > 0, "{key} must be greater than zero");
    Ok(Duration::from_secs(secs))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reveal_interval_is_50ms() {
        assert_eq!(Config::default().reveal_interval, Duration::from_millis(50));
    }

    #[test]
    fn test_reveal_interval_parses_millis() {
        assert_eq!(parse_reveal_interval(" 20 ").unwrap(), Duration::from_millis(20));
    }

    #[test]
    fn test_reveal_interval_rejects_zero_and_garbage() {
        assert!(parse_reveal_interval("0").is_err());
        assert!(parse_reveal_interval("fast").is_err());
    }

    #[test]
    fn test_session_durations_parse_seconds() {
        assert_eq!(
            parse_secs("SESSION_IDLE_TTL_SECS", "90").unwrap(),
            Duration::from_secs(90)
        );
        assert!(parse_secs("SESSION_IDLE_TTL_SECS", "0").is_err());
        assert!(parse_secs("SESSION_SWEEP_INTERVAL_SECS", "-1").is_err());
    }

    #[test]
    fn test_default_has_no_ad_client() {
        assert!(Config::default().adsense_client.is_none());
    }
}
