//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Optional TOML catalog replacing the built-in restaurants.
    pub catalog_path: Option<PathBuf>,

    /// Optional directory of templates overriding the built-in ones.
    pub templates_dir: Option<PathBuf>,

    /// Cookie SameSite policy: "strict", "lax", or "none" (default: "lax").
    pub cookie_same_site: String,

    /// Send the session cookie only over HTTPS (default: false).
    pub cookie_secure: bool,

    /// Session lifetime after the last request, in hours (default: 24).
    pub session_expiry_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            catalog_path: None,
            templates_dir: None,
            cookie_same_site: "lax".to_string(),
            cookie_secure: false,
            session_expiry_hours: 24,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let templates_dir = lookup("TEMPLATES_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let cookie_same_site = lookup("COOKIE_SAME_SITE")
            .unwrap_or_else(|| "lax".to_string())
            .to_lowercase();

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(v) => parse_bool(&v).context("COOKIE_SECURE must be true or false")?,
            None => false,
        };

        let session_expiry_hours: i64 = lookup("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|| "24".to_string())
            .parse()
            .context("SESSION_EXPIRY_HOURS must be a valid i64")?;
        if session_expiry_hours <= 0 {
            anyhow::bail!("SESSION_EXPIRY_HOURS must be positive");
        }

        Ok(Self {
            port,
            catalog_path,
            templates_dir,
            cookie_same_site,
            cookie_secure,
            session_expiry_hours,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("not a boolean: {other:?}"),
    }
}
