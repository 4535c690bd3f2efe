//! Whatslink-Scraper: WhatsApp group invite scraping service
//!
//! This crate scrapes a group-listing website for WhatsApp invite links and
//! category listings, and serves the results as JSON over HTTP.

pub mod api;
pub mod config;
pub mod crawler;
pub mod error;
pub mod server;
pub mod state;

use thiserror::Error;

/// Main error type for Whatslink-Scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Invalid listen address '{addr}': {source}")]
    ListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Whatslink-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Category, CategoryLister, CollectReport, LinkCollector, StopReason};
pub use error::AppError;
pub use server::{Server, ServerHandle};
pub use state::AppState;
