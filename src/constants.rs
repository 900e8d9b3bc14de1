//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for page requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL of the statistics site
pub const DEFAULT_SITE_DOMAIN: &str = "https://stats.ncaa.org";

/// Name of the per-user cache directory under the home directory
pub const CACHE_DIR_NAME: &str = ".ncaa_stats";

/// Field delimiter used by persisted datasets
pub const DATASET_DELIMITER: char = ',';

/// Cache TTL (Time To Live) values in days
pub mod cache_ttl {
    /// TTL for the school directory (changes a handful of times per decade)
    pub const SCHOOLS_DAYS: u64 = 90;

    /// TTL for per-season team lists (stable once a season is underway)
    pub const TEAM_LIST_DAYS: u64 = 30;

    /// TTL for single-season rosters (players transfer mid-season)
    pub const ROSTER_DAYS: u64 = 14;

    /// TTL for season stat tables (refreshed after each game day)
    pub const SEASON_STATS_DAYS: u64 = 1;
}

/// Selector wait tuning for `PageFetcher::fetch_page`
pub mod selector_wait {
    /// Total window to wait for a selector to appear (seconds)
    pub const WAIT_TIMEOUT_SECONDS: u64 = 10;

    /// Pause between polls of the page (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 500;
}

/// Reserved school dropdown entries that never describe a real school
pub mod reserved_labels {
    /// Aggregate pseudo-school present on some season pages
    pub const CAREER: &str = "Career";

    /// Prefix the site uses to park retired school entries
    pub const DO_NOT_USE_PREFIX: &str = "Z_Do_Not_Use_";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for site domain override
    pub const SITE_DOMAIN: &str = "NCAA_STATS_SITE_DOMAIN";

    /// Environment variable for cache root override
    pub const CACHE_DIR: &str = "NCAA_STATS_CACHE_DIR";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NCAA_STATS_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "NCAA_STATS_HTTP_TIMEOUT";
}

/// Known data-quality artifacts in scraped name fields
pub mod name_artifacts {
    /// Marker the site's renderer leaves behind when a name cell fails to resolve
    pub const BLOCK_ERROR: &str = "block error";
}
