//! School directory retrieval and caching.
//!
//! The site exposes the full school list as a `<select>` dropdown keyed
//! by numeric organization IDs. The directory changes a handful of times
//! per decade, so it is the canonical slow-moving reference dataset:
//! fetched once, cached for 90 days and joined against by every sport's
//! team list.

use scraper::{Html, Selector};
use tracing::debug;

use crate::cache::{Dataset, TtlFileCache};
use crate::constants::{cache_ttl, reserved_labels};
use crate::error::AppError;
use crate::fetcher::PageFetcher;

/// Cache key for the school directory dataset.
pub const SCHOOLS_CACHE_KEY: &str = "schools";

/// Page carrying the school selection dropdown.
pub fn schools_url(site_domain: &str) -> String {
    format!("{site_domain}/teams/history")
}

/// Returns the school directory as `{school_id, school_name}` rows,
/// serving from the cache when fresher than the 90-day reference TTL.
pub async fn get_schools(
    fetcher: &PageFetcher,
    cache: &TtlFileCache,
    site_domain: &str,
) -> Result<Dataset, AppError> {
    let url = schools_url(site_domain);
    cache
        .get_or_fetch(SCHOOLS_CACHE_KEY, cache_ttl::SCHOOLS_DAYS, || async {
            let page = fetcher.fetch_page(&url, None, None).await?;
            parse_school_dropdown(&page.html, &url)
        })
        .await
}

/// Derives the school dataset from the dropdown on a fetched page.
///
/// Entries that never describe a real school are filtered: an empty
/// `value` attribute (the "Select School" placeholder), the aggregate
/// "Career" pseudo-entry and retired entries parked under the
/// `Z_Do_Not_Use_` prefix. A page without the dropdown is a structure
/// failure, never a silent empty dataset.
pub fn parse_school_dropdown(html: &str, url: &str) -> Result<Dataset, AppError> {
    let document = Html::parse_document(html);
    let select_selector =
        Selector::parse("select#org_id_select").expect("static selector must parse");
    let option_selector = Selector::parse("option").expect("static selector must parse");

    let dropdown = document
        .select(&select_selector)
        .next()
        .ok_or_else(|| {
            AppError::page_structure("could not find school selection dropdown", url)
        })?;

    let mut dataset = Dataset::new(vec!["school_id", "school_name"]);
    for option in dropdown.select(&option_selector) {
        let value = option.value().attr("value").unwrap_or("").trim();
        let label = option.text().collect::<String>().trim().to_string();

        if value.is_empty() {
            continue;
        }
        if label == reserved_labels::CAREER
            || label.starts_with(reserved_labels::DO_NOT_USE_PREFIX)
        {
            debug!("Skipping reserved school entry '{label}'");
            continue;
        }
        // The upstream contract guarantees numeric values; anything else
        // is a placeholder in disguise
        if value.parse::<u32>().is_err() {
            debug!("Skipping school entry '{label}' with non-numeric value '{value}'");
            continue;
        }

        dataset.push_row(vec![value.to_string(), label]);
    }

    debug!("Parsed {} schools from dropdown", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DROPDOWN_HTML: &str = r#"
        <html><body>
            <select name="org_id" id="org_id_select">
                <option value="">Select School</option>
                <option value="100">Test University</option>
                <option value="999">Career</option>
                <option value="102">Z_Do_Not_Use_Old</option>
            </select>
        </body></html>
    "#;

    #[test]
    fn test_dropdown_filtering() {
        let dataset =
            parse_school_dropdown(DROPDOWN_HTML, "https://stats.example.org/teams/history")
                .unwrap();
        assert_eq!(dataset.headers, vec!["school_id", "school_name"]);
        assert_eq!(dataset.rows, vec![vec!["100", "Test University"]]);
    }

    #[test]
    fn test_multiple_real_schools_keep_page_order() {
        let html = r#"
            <select id="org_id_select">
                <option value="">Select School</option>
                <option value="100">Test University</option>
                <option value="101">Sample College</option>
                <option value="103">Example State</option>
            </select>
        "#;
        let dataset = parse_school_dropdown(html, "url").unwrap();
        let ids: Vec<_> = dataset.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["100", "101", "103"]);
    }

    #[test]
    fn test_missing_dropdown_is_a_structure_error() {
        let err = parse_school_dropdown("<html><body>Nothing here</body></html>", "url")
            .unwrap_err();
        assert!(matches!(err, AppError::PageStructure { .. }));
        assert!(
            err.to_string()
                .contains("could not find school selection dropdown")
        );
    }

    #[test]
    fn test_non_numeric_values_are_skipped() {
        let html = r#"
            <select id="org_id_select">
                <option value="abc">Broken Entry</option>
                <option value="100">Test University</option>
            </select>
        "#;
        let dataset = parse_school_dropdown(html, "url").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows[0][0], "100");
    }

    #[test]
    fn test_labels_are_trimmed() {
        let html = r#"
            <select id="org_id_select">
                <option value="100">
                    Test University
                </option>
            </select>
        "#;
        let dataset = parse_school_dropdown(html, "url").unwrap();
        assert_eq!(dataset.rows[0][1], "Test University");
    }

    #[test]
    fn test_schools_url() {
        assert_eq!(
            schools_url("https://stats.ncaa.org"),
            "https://stats.ncaa.org/teams/history"
        );
    }
}
