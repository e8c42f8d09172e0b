//! Store configuration.
//!
//! Read from the process environment; malformed values fall back to the
//! defaults with a warning.

use stockroom_core::validation::parse_integer;

/// Hard item limit used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Quantity at or below which an item counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

pub const CAPACITY_VAR: &str = "STOCKROOM_CAPACITY";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// `None` means unbounded.
    pub capacity: Option<usize>,
    pub low_stock_threshold: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StoreConfig {
    pub fn unbounded() -> Self {
        Self {
            capacity: None,
            ..Self::default()
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Load from `STOCKROOM_CAPACITY` / `STOCKROOM_LOW_STOCK_THRESHOLD`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_VAR) {
            match parse_capacity(raw.trim()) {
                Some(capacity) => config.capacity = capacity,
                None => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_CAPACITY,
                    "{CAPACITY_VAR} is not a valid capacity; using default"
                ),
            }
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match parse_integer(raw.trim()) {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    default = DEFAULT_LOW_STOCK_THRESHOLD,
                    "{LOW_STOCK_THRESHOLD_VAR} is not a valid threshold; using default"
                ),
            }
        }

        config
    }
}

/// `Some(None)` is "unbounded", `None` is "unparseable".
fn parse_capacity(raw: &str) -> Option<Option<usize>> {
    if raw.eq_ignore_ascii_case("unbounded") {
        return Some(None);
    }
    let n = usize::try_from(parse_integer(raw).ok()?).ok()?;
    Some(if n == 0 { None } else { Some(n) })
}
