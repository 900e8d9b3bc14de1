//! NCAA Statistics Fetcher Library
//!
//! This library retrieves, caches and normalizes team and player
//! statistics published on stats.ncaa.org. The shared core covers page
//! fetching with HTTP-status-based failure classification, a TTL file
//! cache for slowly-changing reference datasets, the season/sport/
//! category stat-ID registry and the scraped-name normalizer; sport
//! modules layer their page layouts on top of it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ncaa_stats::config::Config;
//! use ncaa_stats::error::AppError;
//! use ncaa_stats::schools::get_schools;
//! use ncaa_stats::sports::SportContext;
//! use ncaa_stats::stat_ids::lookup_stat_id;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let ctx = SportContext::from_config(&config)?;
//!
//!     // Served from ~/.ncaa_stats/schools.csv when fresh
//!     let schools = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain).await?;
//!     println!("{} schools", schools.len());
//!
//!     // Numeric endpoint ID for the 2025 batting table
//!     let stat_id = lookup_stat_id("baseball", 2025, "batting")?;
//!     println!("batting stat ID: {stat_id}");
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod processors;
pub mod schools;
pub mod sports;
pub mod stat_ids;

// Re-export commonly used types for convenience
pub use cache::{CacheInfo, Dataset, TtlFileCache};
pub use config::Config;
pub use error::AppError;
pub use fetcher::{FetchedPage, PageFetcher};
pub use processors::{
    format_folder_str, normalize_name, seconds_from_time_str, time_str_from_seconds,
};
pub use schools::get_schools;
pub use stat_ids::{lookup_stat_id, supported_sports};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
