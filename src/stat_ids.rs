//! Registry of per-season numeric stat endpoint IDs.
//!
//! The statistics site selects which table a request returns through an
//! opaque numeric identifier that changes every season and differs per
//! stat category. This module bakes the known identifiers into a
//! process-wide read-only table; sport modules resolve IDs exclusively
//! through [`lookup_stat_id`] when constructing request URLs.
//!
//! Category shapes are deliberately non-uniform: baseball and softball
//! carry `batting`/`pitching`/`fielding`, the hockey and lacrosse
//! families split `goalkeepers`/`non_goalkeepers` (women's lacrosse adds
//! a `team` table in some seasons) and basketball exposes a single
//! `season` table. Absence of a category for a given season is a
//! legitimate miss, not a defect.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::AppError;

type CategoryIds = HashMap<&'static str, u32>;
type SeasonIds = HashMap<i32, CategoryIds>;

static STAT_ID_TABLE: Lazy<HashMap<&'static str, SeasonIds>> = Lazy::new(build_table);

fn seasons(entries: &[(i32, &[(&'static str, u32)])]) -> SeasonIds {
    entries
        .iter()
        .map(|(season, cats)| (*season, cats.iter().copied().collect()))
        .collect()
}

fn build_table() -> HashMap<&'static str, SeasonIds> {
    let mut table = HashMap::new();

    table.insert(
        "baseball",
        seasons(&[
            (
                2022,
                &[("batting", 14840), ("pitching", 14841), ("fielding", 14842)],
            ),
            (
                2023,
                &[("batting", 14960), ("pitching", 14961), ("fielding", 14962)],
            ),
            (
                2024,
                &[("batting", 15080), ("pitching", 15081), ("fielding", 15082)],
            ),
            (
                2025,
                &[("batting", 15687), ("pitching", 15688), ("fielding", 15689)],
            ),
            (
                2026,
                &[("batting", 15860), ("pitching", 15861), ("fielding", 15862)],
            ),
        ]),
    );

    table.insert(
        "softball",
        seasons(&[
            (
                2024,
                &[("batting", 15089), ("pitching", 15090), ("fielding", 15091)],
            ),
            (
                2025,
                &[("batting", 15696), ("pitching", 15697), ("fielding", 15698)],
            ),
            (
                2026,
                &[("batting", 15869), ("pitching", 15870), ("fielding", 15871)],
            ),
        ]),
    );

    table.insert(
        "mbb",
        seasons(&[
            (2024, &[("season", 15104)]),
            (2025, &[("season", 15705)]),
            (2026, &[("season", 15884)]),
        ]),
    );

    table.insert(
        "wbb",
        seasons(&[
            (2024, &[("season", 15110)]),
            (2025, &[("season", 15711)]),
            (2026, &[("season", 15890)]),
        ]),
    );

    table.insert(
        "field_hockey",
        seasons(&[
            (2024, &[("goalkeepers", 15172), ("non_goalkeepers", 15171)]),
            (2025, &[("goalkeepers", 15655), ("non_goalkeepers", 15654)]),
            (2026, &[("goalkeepers", 15813), ("non_goalkeepers", 15812)]),
        ]),
    );

    table.insert(
        "mens_hockey",
        seasons(&[
            (2024, &[("goalkeepers", 15183), ("non_goalkeepers", 15182)]),
            (2025, &[("goalkeepers", 15660), ("non_goalkeepers", 15659)]),
            (2026, &[("goalkeepers", 15824), ("non_goalkeepers", 15823)]),
        ]),
    );

    table.insert(
        "womens_hockey",
        seasons(&[
            (2024, &[("goalkeepers", 15189), ("non_goalkeepers", 15188)]),
            (2025, &[("goalkeepers", 15666), ("non_goalkeepers", 15665)]),
            (2026, &[("goalkeepers", 15830), ("non_goalkeepers", 15829)]),
        ]),
    );

    table.insert(
        "mens_lacrosse",
        seasons(&[
            (2024, &[("goalkeepers", 15167), ("non_goalkeepers", 15166)]),
            (2025, &[("goalkeepers", 15650), ("non_goalkeepers", 15649)]),
            (2026, &[("goalkeepers", 15808), ("non_goalkeepers", 15807)]),
        ]),
    );

    // Women's lacrosse published a separate team table starting in 2024;
    // the 2026 table ID is not yet live on the site.
    table.insert(
        "womens_lacrosse",
        seasons(&[
            (
                2024,
                &[
                    ("goalkeepers", 15155),
                    ("non_goalkeepers", 15154),
                    ("team", 16541),
                ],
            ),
            (
                2025,
                &[
                    ("goalkeepers", 15648),
                    ("non_goalkeepers", 15647),
                    ("team", 16780),
                ],
            ),
            (2026, &[("goalkeepers", 15806), ("non_goalkeepers", 15805)]),
        ]),
    );

    table
}

/// Resolves the numeric stat endpoint ID for a sport/season/category
/// triple.
///
/// Sport matching is case-insensitive. A missing triple fails loudly
/// with [`AppError::StatIdNotFound`]; it is never defaulted, because a
/// wrong ID would silently return a different sport's table.
///
/// # Examples
/// ```
/// use ncaa_stats::stat_ids::lookup_stat_id;
///
/// assert_eq!(lookup_stat_id("baseball", 2024, "batting").unwrap(), 15080);
/// assert!(lookup_stat_id("baseball", 1900, "batting").is_err());
/// ```
pub fn lookup_stat_id(sport: &str, season: i32, category: &str) -> Result<u32, AppError> {
    let sport_key = sport.to_lowercase();
    STAT_ID_TABLE
        .get(sport_key.as_str())
        .and_then(|seasons| seasons.get(&season))
        .and_then(|categories| categories.get(category))
        .copied()
        .ok_or_else(|| AppError::stat_id_not_found(sport_key, season, category))
}

/// Lists every sport registered in the stat ID table, sorted.
pub fn supported_sports() -> Vec<&'static str> {
    let mut sports: Vec<&'static str> = STAT_ID_TABLE.keys().copied().collect();
    sports.sort_unstable();
    sports
}

/// Lists the seasons registered for a sport, sorted ascending.
/// Returns an empty list for an unknown sport.
pub fn seasons_for_sport(sport: &str) -> Vec<i32> {
    let sport_key = sport.to_lowercase();
    let mut seasons: Vec<i32> = STAT_ID_TABLE
        .get(sport_key.as_str())
        .map(|seasons| seasons.keys().copied().collect())
        .unwrap_or_default();
    seasons.sort_unstable();
    seasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_sports() {
        let expected = [
            "baseball",
            "mbb",
            "wbb",
            "field_hockey",
            "mens_hockey",
            "womens_hockey",
            "mens_lacrosse",
            "womens_lacrosse",
            "softball",
        ];
        for sport in expected {
            assert!(
                STAT_ID_TABLE.contains_key(sport),
                "sport '{sport}' missing from stat ID table"
            );
        }
    }

    #[test]
    fn test_table_has_recent_seasons() {
        for sport in ["baseball", "mbb"] {
            let seasons = seasons_for_sport(sport);
            assert!(seasons.contains(&2024), "{sport} missing 2024");
            assert!(seasons.contains(&2025), "{sport} missing 2025");
        }
    }

    #[test]
    fn test_baseball_structure() {
        for category in ["batting", "pitching", "fielding"] {
            assert!(lookup_stat_id("baseball", 2024, category).is_ok());
        }
    }

    #[test]
    fn test_pinned_baseball_ids() {
        assert_eq!(lookup_stat_id("baseball", 2024, "batting").unwrap(), 15080);
        assert_eq!(lookup_stat_id("baseball", 2024, "pitching").unwrap(), 15081);
        assert_eq!(lookup_stat_id("baseball", 2024, "fielding").unwrap(), 15082);
        assert_eq!(lookup_stat_id("baseball", 2025, "batting").unwrap(), 15687);
    }

    #[test]
    fn test_pinned_lacrosse_ids() {
        assert_eq!(
            lookup_stat_id("mens_lacrosse", 2024, "goalkeepers").unwrap(),
            15167
        );
        assert_eq!(
            lookup_stat_id("mens_lacrosse", 2026, "non_goalkeepers").unwrap(),
            15807
        );
        assert_eq!(
            lookup_stat_id("womens_lacrosse", 2024, "team").unwrap(),
            16541
        );
        assert_eq!(
            lookup_stat_id("womens_lacrosse", 2025, "team").unwrap(),
            16780
        );
    }

    #[test]
    fn test_sport_lookup_is_case_insensitive() {
        assert_eq!(lookup_stat_id("Baseball", 2024, "batting").unwrap(), 15080);
        assert_eq!(lookup_stat_id("BASEBALL", 2024, "batting").unwrap(), 15080);
        assert_eq!(
            lookup_stat_id("Womens_Lacrosse", 2024, "team").unwrap(),
            16541
        );
    }

    #[test]
    fn test_unknown_sport_fails() {
        let err = lookup_stat_id("cricket", 2024, "batting").unwrap_err();
        assert!(matches!(err, AppError::StatIdNotFound { .. }));
        assert!(err.to_string().contains("Could not locate a stat ID"));
    }

    #[test]
    fn test_unknown_season_fails() {
        let err = lookup_stat_id("baseball", 1900, "batting").unwrap_err();
        assert!(matches!(err, AppError::StatIdNotFound { .. }));
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = lookup_stat_id("baseball", 2024, "goalkeepers").unwrap_err();
        assert!(matches!(err, AppError::StatIdNotFound { .. }));
    }

    #[test]
    fn test_category_absent_for_some_seasons_is_a_miss() {
        // The women's lacrosse team table exists for 2024 and 2025 only
        assert!(lookup_stat_id("womens_lacrosse", 2024, "team").is_ok());
        assert!(lookup_stat_id("womens_lacrosse", 2026, "team").is_err());
    }

    #[test]
    fn test_supported_sports_is_sorted_and_complete() {
        let sports = supported_sports();
        assert_eq!(sports.len(), 9);
        let mut sorted = sports.clone();
        sorted.sort_unstable();
        assert_eq!(sports, sorted);
    }

    #[test]
    fn test_seasons_for_unknown_sport_is_empty() {
        assert!(seasons_for_sport("quidditch").is_empty());
    }
}
