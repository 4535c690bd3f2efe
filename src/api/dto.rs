//! Query parameters and their validated request forms.

use serde::Deserialize;

use crate::error::AppError;

/// Raw query of `GET /get_whatsapp_links`.
#[derive(Debug, Default, Deserialize)]
pub struct LinksQuery {
    pub base_url: Option<String>,
    pub num_links: Option<i64>,
}

/// Raw query of `GET /get_categories`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    pub base_url: Option<String>,
}

/// Validated link collection request.
///
/// - `base_url`: site to scrape; blank or missing falls back to the default
/// - `num_links`: number of links wanted; missing falls back to the default,
///   anything below 1 is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub base_url: String,
    pub num_links: usize,
}

impl ScrapeRequest {
    pub fn from_query(
        query: LinksQuery,
        default_base_url: &str,
        default_num_links: usize,
    ) -> Result<Self, AppError> {
        let num_links = match query.num_links {
            None => default_num_links,
            Some(n) if n > 0 => {
                usize::try_from(n).map_err(|_| AppError::bad_request("invalid parameters"))?
            }
            Some(_) => return Err(AppError::bad_request("invalid parameters")),
        };

        Ok(Self {
            base_url: base_url_or_default(query.base_url, default_base_url),
            num_links,
        })
    }
}

/// Validated category listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRequest {
    pub base_url: String,
}

impl CategoryRequest {
    pub fn from_query(query: CategoriesQuery, default_base_url: &str) -> Self {
        Self {
            base_url: base_url_or_default(query.base_url, default_base_url),
        }
    }
}

fn base_url_or_default(base_url: Option<String>, default_base_url: &str) -> String {
    base_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default_base_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "https://gruposwhats.app";

    #[test]
    fn test_defaults_applied() {
        let request = ScrapeRequest::from_query(LinksQuery::default(), DEFAULT, 5).unwrap();
        assert_eq!(request.base_url, DEFAULT);
        assert_eq!(request.num_links, 5);
    }

    #[test]
    fn test_explicit_values_kept() {
        let query = LinksQuery {
            base_url: Some("https://site.test".to_string()),
            num_links: Some(12),
        };
        let request = ScrapeRequest::from_query(query, DEFAULT, 5).unwrap();
        assert_eq!(request.base_url, "https://site.test");
        assert_eq!(request.num_links, 12);
    }

    #[test]
    fn test_non_positive_rejected() {
        for n in [0, -1, i64::MIN] {
            let query = LinksQuery {
                base_url: None,
                num_links: Some(n),
            };
            let err = ScrapeRequest::from_query(query, DEFAULT, 5).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        let query = CategoriesQuery {
            base_url: Some("   ".to_string()),
        };
        assert_eq!(CategoryRequest::from_query(query, DEFAULT).base_url, DEFAULT);
    }
}
