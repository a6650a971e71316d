//! Process configuration read from the environment.
//!
//! Only non-rule settings are configurable; grid size, tick rate and the
//! other rules are compile-time constants in `tui_snake_types`.

pub const SEED_VAR: &str = "SNAKE_SEED";
pub const LOG_PATH_VAR: &str = "SNAKE_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "SNAKE_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Where the fruit seed came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Env,
    Entropy,
    /// `SNAKE_SEED` was set but did not parse; holds the raw value.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub seed_source: SeedSource,
    /// Log file; `None` disables logging.
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let (seed, seed_source) = match non_empty(SEED_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(seed) => (seed, SeedSource::Env),
                Err(_) => (rand::random(), SeedSource::Rejected(raw)),
            },
            None => (rand::random(), SeedSource::Entropy),
        };

        Self {
            seed,
            seed_source,
            log_path: non_empty(LOG_PATH_VAR),
            log_filter: non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
