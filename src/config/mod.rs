//! Configuration module for Whatslink-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All settings have defaults, so running without a file is supported.
//!
//! # Example
//!
//! ```no_run
//! use whatslink_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Listening on: {}", config.server.listen_addr);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, PaginationStrategy, ScraperConfig, SelectorConfig, ServerConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
