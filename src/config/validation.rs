use crate::config::types::{Config, ScraperConfig, SelectorConfig, ServerConfig, UserAgentConfig};
use crate::crawler::SiteSelectors;
use crate::{ConfigError, ScrapeError};
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_scraper_config(&config.scraper)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_selector_config(&config.selectors)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.listen_addr.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "listen_addr must be a socket address, got '{}': {}",
            config.listen_addr, e
        ))
    })?;
    Ok(())
}

/// Validates scraping behavior configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    validate_http_url("default_base_url", &config.default_base_url)?;

    if config.default_num_links < 1 {
        return Err(ConfigError::Validation(format!(
            "default_num_links must be >= 1, got {}",
            config.default_num_links
        )));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    for (name, value) in [
        ("request_timeout_secs", config.request_timeout_secs),
        ("connect_timeout_secs", config.connect_timeout_secs),
        ("deadline_secs", config.deadline_secs),
    ] {
        if value == 0 {
            return Err(ConfigError::Validation(format!("{} must be >= 1", name)));
        }
    }

    if config.invite_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "invite_marker cannot be empty".to_string(),
        ));
    }

    if config.pagination_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "pagination_marker cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates that every configured selector compiles
///
/// Compiles them exactly as the crawler does at startup.
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    SiteSelectors::compile(config).map_err(|e| match e {
        ScrapeError::Selector { selector, message } => {
            ConfigError::InvalidSelector(format!("'{}': {}", selector, message))
        }
        other => ConfigError::InvalidSelector(other.to_string()),
    })?;
    Ok(())
}

/// Validates an absolute http(s) URL
fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, value
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("u", "https://gruposwhats.app").is_ok());
        assert!(validate_http_url("u", "http://127.0.0.1:8080/x").is_ok());

        assert!(validate_http_url("u", "").is_err());
        assert!(validate_http_url("u", "gruposwhats.app").is_err());
        assert!(validate_http_url("u", "ftp://gruposwhats.app").is_err());
    }

    #[test]
    fn test_reject_bad_listen_addr() {
        let mut config = Config::default();
        config.server.listen_addr = "localhost".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_reject_zero_limits() {
        let mut config = Config::default();
        config.scraper.default_num_links = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.scraper.deadline_secs = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.scraper.request_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reject_blank_markers() {
        let mut config = Config::default();
        config.scraper.invite_marker = "  ".to_string();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.scraper.pagination_marker = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reject_bad_crawler_name() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "bad name!".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reject_invalid_selector() {
        let mut config = Config::default();
        config.selectors.invite_button = "a[data-url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_invalid_selector_message_names_selector() {
        let mut config = Config::default();
        config.selectors.group_card = "div..card".to_string();
        match validate(&config) {
            Err(ConfigError::InvalidSelector(message)) => {
                assert!(message.contains("div..card"), "{}", message)
            }
            other => panic!("expected InvalidSelector, got {:?}", other),
        }
    }
}
