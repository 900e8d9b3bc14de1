//! Page retrieval with HTTP-status-based failure classification.
//!
//! Every sport module funnels its page loads through [`PageFetcher`]:
//! one fetch at a time, no automatic retry. Outcomes are classified into
//! the error taxonomy by an ordered list of status-range rules so that
//! callers can pick a per-failure-class policy (skip a team, back off,
//! abort the run); [`crate::error::AppError::is_retryable`] encodes
//! which classes are worth a second attempt.

pub mod http_client;

use std::ops::RangeInclusive;
use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, selector_wait};
use crate::error::AppError;
use http_client::create_http_client_with_timeout;

/// One successfully retrieved page: rendered HTML plus the numeric
/// status that produced it. Ephemeral, never persisted.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,
    pub status: u16,
}

/// How a numeric HTTP status is classified before any content handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Success,
    ClientRejected,
    ServerFailed,
}

/// Ordered classification rules. New ranges slot in here without
/// touching the control flow below.
const STATUS_RULES: &[(RangeInclusive<u16>, StatusKind)] = &[
    (200..=299, StatusKind::Success),
    (400..=499, StatusKind::ClientRejected),
    (500..=599, StatusKind::ServerFailed),
];

fn classify_status(status: u16) -> Option<StatusKind> {
    STATUS_RULES
        .iter()
        .find(|(range, _)| range.contains(&status))
        .map(|(_, kind)| *kind)
}

/// Checks whether a CSS selector matches anywhere in an HTML document.
/// `Err(())` means the selector text itself does not parse.
fn html_matches_selector(html: &str, selector: &str) -> Result<bool, ()> {
    let parsed = Selector::parse(selector).map_err(|_| ())?;
    let document = Html::parse_document(html);
    Ok(document.select(&parsed).next().is_some())
}

/// Blocking-style page fetcher over a pooled HTTP client.
///
/// With no JavaScript execution in scope, "wait for selector" degrades
/// to polling the server within a bounded window: the page is refetched
/// until the selector matches or the window closes.
pub struct PageFetcher {
    client: Client,
    selector_wait_window: Duration,
    selector_poll_interval: Duration,
}

impl PageFetcher {
    /// Creates a fetcher with the default request timeout.
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS)
    }

    /// Creates a fetcher whose requests time out after `timeout_seconds`.
    pub fn with_timeout(timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::from_client(client))
    }

    /// Wraps an existing client (shared pools, tests).
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            selector_wait_window: Duration::from_secs(selector_wait::WAIT_TIMEOUT_SECONDS),
            selector_poll_interval: Duration::from_millis(selector_wait::POLL_INTERVAL_MS),
        }
    }

    /// Overrides the selector wait tuning. Test seam.
    pub fn with_selector_wait(mut self, window: Duration, poll_interval: Duration) -> Self {
        self.selector_wait_window = window;
        self.selector_poll_interval = poll_interval;
        self
    }

    /// Loads `url` and classifies the outcome.
    ///
    /// * `wait_for_selector` - CSS selector that must be present in the
    ///   document before the page counts as loaded; the fetcher polls
    ///   within a fixed internal window and fails with
    ///   [`AppError::SelectorTimeout`] if it never appears.
    /// * `timeout` - per-request override of the client timeout.
    ///
    /// Failure classes: 4xx is a client rejection (do not retry), 5xx a
    /// server failure (caller may retry with backoff), a transport error
    /// with no response at all a connection failure, and any status
    /// outside the classified ranges an unexpected-status failure.
    pub async fn fetch_page(
        &self,
        url: &str,
        wait_for_selector: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<FetchedPage, AppError> {
        let mut page = self.fetch_once(url, timeout).await?;

        if let Some(selector) = wait_for_selector {
            let deadline = Instant::now() + self.selector_wait_window;
            loop {
                match html_matches_selector(&page.html, selector) {
                    Err(()) => {
                        return Err(AppError::page_structure(
                            format!("invalid wait selector '{selector}'"),
                            url,
                        ));
                    }
                    Ok(true) => break,
                    Ok(false) => {}
                }

                if Instant::now() + self.selector_poll_interval > deadline {
                    warn!("Selector '{selector}' never appeared on {url}");
                    return Err(AppError::selector_timeout(selector, url));
                }
                debug!("Selector '{selector}' not present yet on {url}, polling again");
                tokio::time::sleep(self.selector_poll_interval).await;
                page = self.fetch_once(url, timeout).await?;
            }
        }

        Ok(page)
    }

    async fn fetch_once(&self, url: &str, timeout: Option<Duration>) -> Result<FetchedPage, AppError> {
        info!("Fetching page: {url}");

        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request failed for {url}: {e}");
                return Err(if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, "failed to load page")
                } else {
                    AppError::PageFetch(e)
                });
            }
        };

        let status = response.status().as_u16();
        debug!("Response status for {url}: {status}");

        match classify_status(status) {
            Some(StatusKind::Success) => {
                let html = response.text().await.map_err(AppError::PageFetch)?;
                debug!("Fetched {} bytes from {url}", html.len());
                Ok(FetchedPage { html, status })
            }
            Some(StatusKind::ClientRejected) => Err(AppError::page_client_error(status, url)),
            Some(StatusKind::ServerFailed) => Err(AppError::page_server_error(status, url)),
            None => Err(AppError::page_unexpected_status(status, url)),
        }
    }
}
