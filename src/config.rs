use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use tracing::{info, warn};

pub const DEFAULT_CSV_PATH: &str = "data/menus.csv";

pub struct Config {
    pub csv_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            csv_path: try_load("MENU_CSV_PATH", DEFAULT_CSV_PATH)?,
            host: try_load("MENU_HOST", "0.0.0.0")?,
            port: try_load("MENU_PORT", "3000")?,
            static_dir: try_load("MENU_STATIC_DIR", "static")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse::<T>().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("{e}")
    })
    .with_context(|| format!("Environment misconfigured: {key}={raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_falls_back_to_default() {
        let port: u16 = try_load("MENU_TEST_UNSET_PORT", "3000").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_try_load_rejects_bad_value() {
        let result: Result<u16> = try_load("MENU_TEST_UNSET_PORT_BAD", "not-a-port");
        assert!(result.is_err());
    }

    #[test]
    fn test_address_joins_host_and_port() {
        let config = Config {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("static"),
        };
        assert_eq!(config.address(), "127.0.0.1:8080");
    }
}
