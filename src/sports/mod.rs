//! Per-sport scraping glue built on the shared core.
//!
//! Each sport module owns its page layouts and column mappings while the
//! core supplies fetching, caching, ID lookup and name normalization.
//! [`SportContext`] bundles the shared collaborators so sport functions
//! stay free of global state.

pub mod baseball;

use std::fmt;
use std::str::FromStr;

use scraper::ElementRef;

use crate::cache::TtlFileCache;
use crate::config::Config;
use crate::error::AppError;
use crate::fetcher::PageFetcher;

/// NCAA division level. The site accepts several spellings (numeric,
/// Roman numeral, "D1" shorthand); everything funnels through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionLevel {
    One,
    Two,
    Three,
}

impl DivisionLevel {
    /// Numeric form used in request URLs.
    pub fn as_number(&self) -> u8 {
        match self {
            DivisionLevel::One => 1,
            DivisionLevel::Two => 2,
            DivisionLevel::Three => 3,
        }
    }

    /// Roman numeral form used in page labels and cache keys.
    pub fn as_numeral(&self) -> &'static str {
        match self {
            DivisionLevel::One => "I",
            DivisionLevel::Two => "II",
            DivisionLevel::Three => "III",
        }
    }

    /// Parses a numeric level (1, 2, 3).
    pub fn from_number(level: i64) -> Result<Self, AppError> {
        match level {
            1 => Ok(DivisionLevel::One),
            2 => Ok(DivisionLevel::Two),
            3 => Ok(DivisionLevel::Three),
            other => Err(AppError::Custom(format!(
                "invalid NCAA division level: {other}"
            ))),
        }
    }
}

impl FromStr for DivisionLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1" | "I" | "D1" => Ok(DivisionLevel::One),
            "2" | "II" | "D2" => Ok(DivisionLevel::Two),
            "3" | "III" | "D3" => Ok(DivisionLevel::Three),
            other => Err(AppError::Custom(format!(
                "invalid NCAA division level: {other}"
            ))),
        }
    }
}

impl fmt::Display for DivisionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_numeral())
    }
}

/// Shared collaborators handed to every sport function: one fetcher,
/// one cache, one site domain.
pub struct SportContext {
    pub fetcher: PageFetcher,
    pub cache: TtlFileCache,
    pub site_domain: String,
}

impl SportContext {
    /// Builds a context from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let fetcher = PageFetcher::with_timeout(config.http_timeout_seconds)?;
        let cache = match &config.cache_dir {
            Some(dir) => TtlFileCache::with_root(dir),
            None => TtlFileCache::new(),
        };
        Ok(Self {
            fetcher,
            cache,
            site_domain: config.site_domain.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a context with explicit collaborators (tests, embedding).
    pub fn new(fetcher: PageFetcher, cache: TtlFileCache, site_domain: impl Into<String>) -> Self {
        Self {
            fetcher,
            cache,
            site_domain: site_domain.into(),
        }
    }
}

/// Extracts the numeric entity ID embedded in an anchor href, e.g.
/// `/teams/100`, `/players/1001?year=2025` or `/contests/12345/box_score`.
///
/// The ID is the last all-digit path segment before any query string.
pub fn extract_entity_id(href: &str) -> Option<u32> {
    let path = href.split(['?', '#']).next().unwrap_or("");
    path.rsplit('/')
        .find_map(|segment| segment.parse::<u32>().ok())
}

/// Collects an element's text content, whitespace-collapsed.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_division_level_from_str_variants() {
        for (input, expected) in [
            ("1", DivisionLevel::One),
            ("I", DivisionLevel::One),
            ("i", DivisionLevel::One),
            ("D1", DivisionLevel::One),
            ("2", DivisionLevel::Two),
            ("ii", DivisionLevel::Two),
            ("D2", DivisionLevel::Two),
            ("3", DivisionLevel::Three),
            ("III", DivisionLevel::Three),
            ("d3", DivisionLevel::Three),
        ] {
            assert_eq!(input.parse::<DivisionLevel>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_division_level_invalid_input() {
        assert!("99".parse::<DivisionLevel>().is_err());
        assert!("IV".parse::<DivisionLevel>().is_err());
        assert!(DivisionLevel::from_number(99).is_err());
    }

    #[test]
    fn test_division_level_forms() {
        assert_eq!(DivisionLevel::One.as_number(), 1);
        assert_eq!(DivisionLevel::Three.as_numeral(), "III");
        assert_eq!(DivisionLevel::Two.to_string(), "II");
    }

    #[test]
    fn test_extract_entity_id() {
        assert_eq!(extract_entity_id("/teams/100"), Some(100));
        assert_eq!(extract_entity_id("/players/1001?year=2025"), Some(1001));
        assert_eq!(extract_entity_id("/contests/12345/box_score"), Some(12345));
        assert_eq!(extract_entity_id("/teams/"), None);
        assert_eq!(extract_entity_id("javascript:void(0)"), None);
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<table><tr><td>  John\n   Doe </td></tr></table>");
        let selector = Selector::parse("td").unwrap();
        let td = html.select(&selector).next().unwrap();
        assert_eq!(element_text(&td), "John Doe");
    }
}
