use std::env;

use bookstore_core::resolver::ResolverError;
use thiserror::Error;

/// Environment variable holding the DynamoDB table name.
pub const BOOKS_TABLE: &str = "BOOKS_TABLE";
/// Optional custom DynamoDB endpoint (local DynamoDB).
pub const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";
/// Optional AWS region override.
pub const AWS_REGION: &str = "AWS_REGION";

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not defined")]
    MissingVar(&'static str),
}

impl From<ConfigError> for ResolverError {
    fn from(err: ConfigError) -> Self {
        ResolverError::Configuration(err.to_string())
    }
}

/// Resolver configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the table holding book records.
    pub books_table: String,
    /// Custom endpoint URL, when talking to a local DynamoDB.
    pub endpoint_url: Option<String>,
    /// Region override. The SDK default chain decides when unset.
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOOKS_TABLE` - Table name (required)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `AWS_REGION` - Region override (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            books_table: non_blank(BOOKS_TABLE).ok_or(ConfigError::MissingVar(BOOKS_TABLE))?,
            endpoint_url: non_blank(AWS_ENDPOINT_URL),
            region: non_blank(AWS_REGION),
        })
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), _) => format!("Local DynamoDB ({}) table {}", url, self.books_table),
            (None, Some(region)) => {
                format!("AWS DynamoDB (region: {}) table {}", region, self.books_table)
            }
            (None, None) => format!("AWS DynamoDB table {}", self.books_table),
        }
    }
}
