//! Client configuration read from the environment.

use reqwest::Url;
use thiserror::Error;

use storefront_core::DomainError;
use storefront_products::Category;

/// Product-listing endpoint used when none is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products/";

pub const CATALOG_URL_VAR: &str = "STOREFRONT_CATALOG_URL";
pub const CATEGORY_VAR: &str = "STOREFRONT_CATEGORY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ({value}): {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("{var}: {source}")]
    Category {
        var: &'static str,
        #[source]
        source: DomainError,
    },
}

/// Settings for one storefront client process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fixed product-listing endpoint (no query parameters are ever added).
    pub catalog_url: Url,
    /// Category selected when the catalog first renders.
    pub initial_category: Category,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            initial_category: Category::All,
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = match non_empty(lookup(CATALOG_URL_VAR)) {
            Some(value) => parse_catalog_url(&value)?,
            None => default_catalog_url(),
        };

        let initial_category = match non_empty(lookup(CATEGORY_VAR)) {
            Some(value) => value.parse::<Category>().map_err(|source| ConfigError::Category {
                var: CATEGORY_VAR,
                source,
            })?,
            None => Category::All,
        };

        Ok(Self {
            catalog_url,
            initial_category,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_catalog_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        var: CATALOG_URL_VAR,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            var: CATALOG_URL_VAR,
            scheme: other.to_string(),
        }),
    }
}

fn default_catalog_url() -> Url {
    Url::parse(DEFAULT_CATALOG_URL).expect("DEFAULT_CATALOG_URL is an absolute URL")
}
