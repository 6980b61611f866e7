use std::env;

use anyhow::{Context, Result};

use crate::enums::Locale;
use crate::objects::WEVERSE_ORIGIN;

/// Configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Unset
/// variables fall back to `Config::default()`, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin joined onto each notification's webUrl when printing links.
    pub origin: String,
    /// Which message body to show in terminal output.
    pub locale: Locale,
}

impl Config {
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        let locale = match env::var("WEVERSE_LOCALE") {
            Ok(raw) => raw
                .parse::<Locale>()
                .map_err(anyhow::Error::msg)
                .context("Invalid WEVERSE_LOCALE")?,
            Err(_) => defaults.locale,
        };

        Ok(Self {
            origin: env::var("WEVERSE_ORIGIN").unwrap_or(defaults.origin),
            locale,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: WEVERSE_ORIGIN.to_string(),
            locale: Locale::default(),
        }
    }
}
