use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub frontend_dir: String,
    pub cors_origin: String,
    pub seed_demo_data: bool,
    pub event_buffer: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let defaults = Self::default();

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            frontend_dir: std::env::var("FRONTEND_DIR").unwrap_or(defaults.frontend_dir),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            seed_demo_data: match std::env::var("SEED_DEMO_DATA") {
                Ok(v) => parse_flag(&v).with_context(|| format!("SEED_DEMO_DATA={}", v))?,
                Err(_) => defaults.seed_demo_data,
            },
            event_buffer: match std::env::var("EVENT_BUFFER") {
                Ok(v) => v
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .with_context(|| format!("EVENT_BUFFER must be a positive integer, got {}", v))?,
                Err(_) => defaults.event_buffer,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool, anyhow::Error> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 21547,
            frontend_dir: "../frontend/dist".into(),
            cors_origin: "http://localhost:21548,http://127.0.0.1:21548".into(),
            seed_demo_data: true,
            event_buffer: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" on ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
