use anyhow::{anyhow, Result};

pub const ITEMS_TABLE_VAR: &str = "TABLE_NAME";
pub const REPORTS_TABLE_VAR: &str = "REPORTS_TABLE_NAME";
pub const BUCKET_VAR: &str = "BUCKET_NAME";
pub const EVENT_BUS_VAR: &str = "EVENT_BUS_NAME";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Deployment-provided settings for the HTTP handlers.
///
/// Resource names are injected by the infrastructure stack through
/// environment variables; nothing here has a built-in default. The event
/// processor only reads `EVENT_BUS_NAME`, for its startup log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub items_table: String,
    pub reports_table: String,
    pub bucket_name: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow!("{key} not set"))
        };

        Ok(Self {
            items_table: required(ITEMS_TABLE_VAR)?,
            reports_table: required(REPORTS_TABLE_VAR)?,
            bucket_name: required(BUCKET_VAR)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}
