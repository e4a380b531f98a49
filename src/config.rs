//! Runtime configuration
//!
//! minibit has no configuration file; the few knobs it has are read from the
//! environment once at start-up:
//!
//! - `MINIBIT_COMMIT_DATE`: fixed timestamp for new commits (RFC 2822 or
//!   `%Y-%m-%d %H:%M:%S %z`), mostly useful for reproducible histories
//! - `NO_PAGER`: when set, `log` never goes through the pager
//! - `MINIBIT_LOG`: tracing filter directive, defaults to `warn`

use chrono::{DateTime, FixedOffset};

pub const COMMIT_DATE_ENV: &str = "MINIBIT_COMMIT_DATE";
pub const NO_PAGER_ENV: &str = "NO_PAGER";
pub const LOG_ENV: &str = "MINIBIT_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Timestamp stamped on every new commit instead of the current time
    pub commit_date: Option<DateTime<FixedOffset>>,
    /// Whether long output may be sent through the pager
    pub pager: bool,
    /// Filter directive handed to the tracing subscriber
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_date: None,
            pager: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_env() -> Self {
        let commit_date = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| Self::parse_date(&date_str));
        let pager = std::env::var_os(NO_PAGER_ENV).is_none();
        let log_filter =
            std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Config {
            commit_date,
            pager,
            log_filter,
        }
    }

    pub fn parse_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
    }

    /// Timestamp to use for a commit created right now
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}
