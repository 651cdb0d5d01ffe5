use crate::i18n::LocaleRegistry;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    /// Absolute origin used when building links meant to be shared
    /// (e.g., "https://events.example.com"), without a trailing slash
    pub public_base_url: String,

    // Remote event API
    pub api_base_url: String,

    // Localization
    pub locales: LocaleRegistry,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let supported_locales: Vec<String> = std::env::var("SUPPORTED_LOCALES")
            .unwrap_or_else(|_| "en,pl".to_string())
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();
        let default_locale =
            std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .map(|v| v.parse().context("PORT must be a valid port number"))
                .transpose()?
                .unwrap_or(3000),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),

            // Remote event API
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost/api/".to_string()),

            // Localization
            locales: LocaleRegistry::new(&supported_locales, &default_locale)
                .context("Invalid SUPPORTED_LOCALES / DEFAULT_LOCALE configuration")?,
        })
    }
}
