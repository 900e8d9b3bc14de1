//! TTL file cache for slowly-changing reference datasets.
//!
//! School directories, team lists and season stat tables are expensive
//! to fetch (a full browser page load each) and change rarely, so every
//! sport module routes them through [`TtlFileCache::get_or_fetch`]. One
//! delimited file per dataset key lives under a per-user cache root;
//! freshness is judged from the file's modification time, never enforced
//! by deletion. Refreshes are wholesale overwrites via a temp file and
//! rename, so a concurrent reader sees either the old or the new file,
//! never a partial one.

pub mod dataset;

pub use dataset::Dataset;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::config::paths::get_cache_dir_path;
use crate::constants::DATASET_DELIMITER;
use crate::error::AppError;
use crate::processors::format_folder_str;

const SECONDS_PER_DAY: u64 = 86_400;

/// Source of "now" for freshness checks. Production code uses
/// [`SystemClock`]; tests inject a [`FixedClock`] to age the cache
/// without touching file mtimes.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock pinned to one instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

/// Inspection record for one cached dataset file.
#[derive(Debug, Clone)]
pub struct CacheInfo {
    pub key: String,
    pub path: PathBuf,
    pub row_count: usize,
    pub age_days: f64,
    pub refreshed: DateTime<Local>,
}

/// Key→dataset persistence with age-based invalidation.
///
/// The cache exclusively owns its root directory tree; no other
/// component writes there.
pub struct TtlFileCache {
    root: PathBuf,
    clock: Arc<dyn Clock>,
}

impl Default for TtlFileCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TtlFileCache {
    /// Creates a cache rooted at the per-user default directory
    /// (`~/.ncaa_stats`, overridable via config/env; see
    /// [`get_cache_dir_path`]).
    pub fn new() -> Self {
        Self::with_root(get_cache_dir_path())
    }

    /// Creates a cache rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the freshness clock. Test seam.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deterministic file path for a dataset key.
    pub fn dataset_path(&self, key: &str) -> PathBuf {
        let joined = format!("{}/{}.csv", self.root.to_string_lossy(), key);
        PathBuf::from(format_folder_str(&joined))
    }

    /// Returns the cached dataset for `key` if a file exists, is younger
    /// than `ttl_days` and parses cleanly; `Ok(None)` on any miss.
    /// Corruption degrades to a miss (logged), never to an error, so
    /// transient cache damage heals itself on the next fetch.
    pub async fn load_fresh(&self, key: &str, ttl_days: u64) -> Result<Option<Dataset>, AppError> {
        let path = self.dataset_path(key);
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            Err(_) => return Ok(None),
        };

        let mtime = metadata.modified()?;
        let age = self
            .clock
            .now()
            .duration_since(mtime)
            .unwrap_or(Duration::ZERO);
        if age >= Duration::from_secs(ttl_days * SECONDS_PER_DAY) {
            debug!(
                "Cache entry '{}' is stale ({:.1} days old, TTL {} days)",
                key,
                age.as_secs_f64() / SECONDS_PER_DAY as f64,
                ttl_days
            );
            return Ok(None);
        }

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(t) => t,
            Err(e) => {
                warn!(
                    "Cache file {} is unreadable, treating as a miss: {e}",
                    path.display()
                );
                return Ok(None);
            }
        };

        match Dataset::from_delimited(&text, DATASET_DELIMITER) {
            Ok(ds) => {
                debug!("Cache hit for '{}' ({} rows)", key, ds.len());
                Ok(Some(ds))
            }
            Err(message) => {
                let corrupt = AppError::cache_corrupt(path.to_string_lossy(), message);
                warn!("{corrupt}, treating as a miss");
                Ok(None)
            }
        }
    }

    /// Persists a dataset wholesale under `key`, overwriting any prior
    /// content. The write lands in a sibling temp file first and is
    /// renamed into place.
    pub async fn store(&self, key: &str, dataset: &Dataset) -> Result<PathBuf, AppError> {
        let path = self.dataset_path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = path.with_extension("csv.tmp");
        tokio::fs::write(&tmp_path, dataset.to_delimited(DATASET_DELIMITER)).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        debug!(
            "Stored {} rows under cache key '{}' at {}",
            dataset.len(),
            key,
            path.display()
        );
        Ok(path)
    }

    /// Returns the cached dataset for `key` when fresher than `ttl_days`,
    /// otherwise invokes `fetch_fn` exactly once, persists its result and
    /// returns it. Fetch failures propagate without disturbing whatever
    /// file is already on disk.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        ttl_days: u64,
        fetch_fn: F,
    ) -> Result<Dataset, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Dataset, AppError>>,
    {
        if let Some(dataset) = self.load_fresh(key, ttl_days).await? {
            return Ok(dataset);
        }

        info!("Cache miss for '{}', fetching fresh data", key);
        let dataset = fetch_fn().await?;
        self.store(key, &dataset).await?;
        Ok(dataset)
    }

    /// Inspection record for one key, or `None` when nothing is cached.
    pub async fn info(&self, key: &str) -> Option<CacheInfo> {
        let path = self.dataset_path(key);
        let metadata = tokio::fs::metadata(&path).await.ok()?;
        let mtime = metadata.modified().ok()?;
        let age = self
            .clock
            .now()
            .duration_since(mtime)
            .unwrap_or(Duration::ZERO);
        let row_count = tokio::fs::read_to_string(&path)
            .await
            .ok()
            .and_then(|text| Dataset::from_delimited(&text, DATASET_DELIMITER).ok())
            .map(|ds| ds.len())
            .unwrap_or(0);

        Some(CacheInfo {
            key: key.to_string(),
            path,
            row_count,
            age_days: age.as_secs_f64() / SECONDS_PER_DAY as f64,
            refreshed: DateTime::<Local>::from(mtime),
        })
    }

    /// Inspection records for every dataset file under the root, sorted
    /// by key. An absent root yields an empty list.
    pub async fn list(&self) -> Result<Vec<CacheInfo>, AppError> {
        let mut infos = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(_) => return Ok(infos),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && let Some(info) = self.info(stem).await
            {
                infos.push(info);
            }
        }

        infos.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(infos)
    }

    /// Deletes every dataset file under the root. Returns how many files
    /// were removed. The root directory itself stays in place.
    pub async fn clear(&self) -> Result<usize, AppError> {
        let mut removed = 0;
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(_) => return Ok(0),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("csv") {
                tokio::fs::remove_file(&path).await?;
                removed += 1;
            }
        }

        info!("Cleared {removed} cached datasets from {}", self.root.display());
        Ok(removed)
    }
}
