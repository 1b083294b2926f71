use std::env;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub fake_delay: Option<DelayRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("API_PORT") {
            Ok(value) => value.parse()?,
            Err(_) => 8000,
        };
        let fake_delay = match env::var("FAKE_DELAY_MS") {
            Ok(value) => Some(DelayRange::parse(&value)?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            fake_delay,
        })
    }
}

impl DelayRange {
    pub fn parse(s: &str) -> Result<Self> {
        let (min, max) = s
            .split_once('-')
            .ok_or(anyhow::anyhow!("Expected a min-max range, got {:?}", s))?;
        let min_ms = min.trim().parse()?;
        let max_ms = max.trim().parse()?;
        if min_ms > max_ms {
            anyhow::bail!("Delay range {} must not exceed {}", min_ms, max_ms);
        }

        Ok(Self { min_ms, max_ms })
    }

    pub fn sample(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}
