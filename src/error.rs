use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    PageFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Page request rejected (HTTP {status}): {url}")]
    PageClientError { status: u16, url: String },

    #[error("Server failed to serve page (HTTP {status}): {url}")]
    PageServerError { status: u16, url: String },

    #[error("Unexpected HTTP status ({status}): {url}")]
    PageUnexpectedStatus { status: u16, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching page: {url}")]
    NetworkTimeout { url: String },

    #[error("Failed to load page: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Timed out waiting for selector '{selector}' on {url}")]
    SelectorTimeout { selector: String, url: String },

    // Page content errors
    #[error("Unexpected page structure: {message} (URL: {url})")]
    PageStructure { message: String, url: String },

    // Registry errors
    #[error("Could not locate a stat ID for sport={sport}, season={season}, category={category}")]
    StatIdNotFound {
        sport: String,
        season: i32,
        category: String,
    },

    // Cache errors
    #[error("Corrupt cache file at {path}: {message}")]
    CacheCorrupt { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a client-rejected page error (4xx status codes)
    pub fn page_client_error(status: u16, url: impl Into<String>) -> Self {
        Self::PageClientError {
            status,
            url: url.into(),
        }
    }

    /// Create a server-failed page error (5xx status codes)
    pub fn page_server_error(status: u16, url: impl Into<String>) -> Self {
        Self::PageServerError {
            status,
            url: url.into(),
        }
    }

    /// Create an error for a status outside every classified range
    pub fn page_unexpected_status(status: u16, url: impl Into<String>) -> Self {
        Self::PageUnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a selector wait timeout error
    pub fn selector_timeout(selector: impl Into<String>, url: impl Into<String>) -> Self {
        Self::SelectorTimeout {
            selector: selector.into(),
            url: url.into(),
        }
    }

    /// Create a page structure error with a descriptive message
    pub fn page_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::PageStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a stat ID lookup error
    pub fn stat_id_not_found(
        sport: impl Into<String>,
        season: i32,
        category: impl Into<String>,
    ) -> Self {
        Self::StatIdNotFound {
            sport: sport.into(),
            season,
            category: category.into(),
        }
    }

    /// Create a corrupt cache file error
    pub fn cache_corrupt(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CacheCorrupt {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if error is retryable from the caller's point of view.
    /// The fetcher itself never retries; callers use this to pick a policy
    /// (skip a team, back off and refetch, abort the run).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::PageServerError { .. }
        )
    }
}
