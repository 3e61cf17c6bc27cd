// src/config.rs
use anyhow::{anyhow, Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::wishlist::WishlistBackend;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    pub wishlist_backend: WishlistBackend,
    /// Mark cookies `Secure` even when the request looks like plain HTTP.
    pub secure_cookies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "estatemate.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
            wishlist_backend: WishlistBackend::Cookie,
            secure_cookies: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let addr = match lookup("ESTATEMATE_ADDR") {
            Some(v) => v
                .parse::<SocketAddr>()
                .with_context(|| format!("ESTATEMATE_ADDR must be host:port, got `{v}`"))?,
            None => defaults.addr,
        };

        let max_workers = match lookup("ESTATEMATE_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .with_context(|| format!("ESTATEMATE_WORKERS must be a number, got `{v}`"))?,
            None => defaults.max_workers,
        };

        let wishlist_backend = match lookup("WISHLIST_BACKEND") {
            Some(v) => v.parse::<WishlistBackend>().map_err(|e| anyhow!(e))?,
            None => defaults.wishlist_backend,
        };

        let secure_cookies = match lookup("SECURE_COOKIES") {
            Some(v) => parse_bool(&v)
                .with_context(|| format!("SECURE_COOKIES must be true or false, got `{v}`"))?,
            None => defaults.secure_cookies,
        };

        Ok(Self {
            addr,
            db_path: lookup("ESTATEMATE_DB").unwrap_or(defaults.db_path),
            schema_path: lookup("ESTATEMATE_SCHEMA").unwrap_or(defaults.schema_path),
            max_workers,
            wishlist_backend,
            secure_cookies,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("not a boolean: {other}")),
    }
}
