use std::path::{Path, PathBuf};

use crate::constants::{CACHE_DIR_NAME, env_vars};

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("ncaa_stats")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("ncaa_stats")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the cache root directory for persisted datasets.
///
/// Resolution order: `NCAA_STATS_CACHE_DIR` environment variable, then
/// `~/.ncaa_stats` under the user's home directory, then the current
/// directory when no home is available.
pub fn get_cache_dir_path() -> PathBuf {
    if let Ok(dir) = std::env::var(env_vars::CACHE_DIR)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(CACHE_DIR_NAME)
}
