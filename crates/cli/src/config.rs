//! Shell configuration loaded from the environment.

use stockroom_inventory::StoreConfig;
use stockroom_observability::LogFormat;

pub const OUTPUT_VAR: &str = "STOCKROOM_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

/// How item listings are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellConfig {
    pub store: StoreConfig,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store = StoreConfig::from_lookup(&lookup);

        let output = match lookup(OUTPUT_VAR) {
            None => OutputFormat::default(),
            Some(raw) => OutputFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "{OUTPUT_VAR} must be `table` or `json`; using table");
                OutputFormat::default()
            }),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "{LOG_FORMAT_VAR} must be `pretty` or `json`; using pretty");
                LogFormat::default()
            }),
        };

        Self {
            store,
            output,
            log_format,
        }
    }
}
