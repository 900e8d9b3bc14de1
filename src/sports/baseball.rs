//! Baseball page scraping: team lists, rosters, schedules and season
//! stat tables.
//!
//! Page navigation and column mappings here are baseball-specific; the
//! fetch/cache/ID/name machinery is the shared core. Other sport modules
//! follow the same shape with their own layouts.

use std::collections::HashMap;

use scraper::{Html, Selector};
use tracing::debug;

use crate::cache::Dataset;
use crate::constants::cache_ttl;
use crate::error::AppError;
use crate::processors::normalize_name;
use crate::schools::get_schools;
use crate::stat_ids::lookup_stat_id;
use crate::sports::{DivisionLevel, SportContext, element_text, extract_entity_id};

/// Sport code the site uses for baseball team lists.
const SPORT_CODE: &str = "MBA";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Returns the baseball team list for a season and division, joined
/// against the school directory. Cached per season/division.
///
/// Columns: `team_id`, `team_name`, `school_id`, `conference`.
pub async fn get_baseball_teams(
    ctx: &SportContext,
    season: i32,
    level: DivisionLevel,
) -> Result<Dataset, AppError> {
    let schools = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain).await?;
    let url = format!(
        "{}/team/inst_team_list?sport_code={}&academic_year={}&division={}",
        ctx.site_domain,
        SPORT_CODE,
        season,
        level.as_number()
    );
    let key = format!("baseball_teams_{}_{}", season, level.as_numeral());

    ctx.cache
        .get_or_fetch(&key, cache_ttl::TEAM_LIST_DAYS, || async {
            let page = ctx.fetcher.fetch_page(&url, None, None).await?;
            parse_team_list(&page.html, &url, &schools)
        })
        .await
}

/// Returns a team's roster with canonicalized player names. Cached per
/// team.
///
/// Columns: `player_id`, `player_name`, `jersey`, `position`, `class_year`.
pub async fn get_baseball_team_roster(
    ctx: &SportContext,
    team_id: u32,
) -> Result<Dataset, AppError> {
    let url = format!("{}/teams/{}/roster", ctx.site_domain, team_id);
    let key = format!("baseball_roster_{team_id}");

    ctx.cache
        .get_or_fetch(&key, cache_ttl::ROSTER_DAYS, || async {
            let page = ctx.fetcher.fetch_page(&url, None, None).await?;
            parse_roster(&page.html, &url)
        })
        .await
}

/// Returns a team's schedule with opponent and contest IDs resolved from
/// row anchors.
///
/// Columns: `date`, `opponent_id`, `opponent_name`, `result`, `contest_id`.
pub async fn get_baseball_team_schedule(
    ctx: &SportContext,
    team_id: u32,
) -> Result<Dataset, AppError> {
    let url = format!("{}/teams/{}", ctx.site_domain, team_id);
    let key = format!("baseball_schedule_{team_id}");

    ctx.cache
        .get_or_fetch(&key, cache_ttl::SEASON_STATS_DAYS, || async {
            let page = ctx.fetcher.fetch_page(&url, None, None).await?;
            parse_schedule(&page.html, &url)
        })
        .await
}

/// Returns a team's season-to-date batting table.
pub async fn get_baseball_player_season_batting_stats(
    ctx: &SportContext,
    team_id: u32,
    season: i32,
) -> Result<Dataset, AppError> {
    season_stats(ctx, team_id, season, "batting").await
}

/// Returns a team's season-to-date pitching table.
pub async fn get_baseball_player_season_pitching_stats(
    ctx: &SportContext,
    team_id: u32,
    season: i32,
) -> Result<Dataset, AppError> {
    season_stats(ctx, team_id, season, "pitching").await
}

/// Returns a team's season-to-date fielding table.
pub async fn get_baseball_player_season_fielding_stats(
    ctx: &SportContext,
    team_id: u32,
    season: i32,
) -> Result<Dataset, AppError> {
    season_stats(ctx, team_id, season, "fielding").await
}

/// Shared season-stat fetch: resolves the endpoint ID for the category,
/// waits for the stat grid to render and parses it. Cached per
/// category/season/team with the short stat-table TTL.
async fn season_stats(
    ctx: &SportContext,
    team_id: u32,
    season: i32,
    category: &str,
) -> Result<Dataset, AppError> {
    let stat_id = lookup_stat_id("baseball", season, category)?;
    let url = format!(
        "{}/teams/{}/season_to_date_stats?year_stat_category_id={}",
        ctx.site_domain, team_id, stat_id
    );
    let key = format!("baseball_{category}_{season}_{team_id}");

    ctx.cache
        .get_or_fetch(&key, cache_ttl::SEASON_STATS_DAYS, || async {
            let page = ctx
                .fetcher
                .fetch_page(&url, Some("#stat_grid"), None)
                .await?;
            parse_stat_grid(&page.html, &url)
        })
        .await
}

/// Parses the institutional team list table. Rows without a team anchor
/// (spacers, headings) are skipped; a page without any table is a
/// structure failure.
pub fn parse_team_list(html: &str, url: &str, schools: &Dataset) -> Result<Dataset, AppError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table");
    let row_sel = selector("tr");
    let cell_sel = selector("td");
    let anchor_sel = selector("a[href]");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| AppError::page_structure("could not find team list table", url))?;

    let school_ids: HashMap<&str, &str> = schools
        .rows
        .iter()
        .filter(|r| r.len() >= 2)
        .map(|r| (r[1].as_str(), r[0].as_str()))
        .collect();

    let mut dataset = Dataset::new(vec!["team_id", "team_name", "school_id", "conference"]);
    for row in table.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        let Some(first) = cells.first() else { continue };
        let Some(anchor) = first.select(&anchor_sel).next() else {
            continue;
        };
        let Some(team_id) = anchor.value().attr("href").and_then(extract_entity_id) else {
            continue;
        };

        let team_name = element_text(&anchor);
        let school_id = school_ids
            .get(team_name.as_str())
            .copied()
            .unwrap_or_default();
        let conference = cells
            .get(1)
            .map(element_text)
            .unwrap_or_default();

        dataset.push_row(vec![
            team_id.to_string(),
            team_name,
            school_id.to_string(),
            conference,
        ]);
    }

    debug!("Parsed {} baseball teams from {url}", dataset.len());
    Ok(dataset)
}

/// Parses a roster table. The name column is canonicalized through the
/// shared name normalizer; the player ID comes from the name cell's
/// anchor.
pub fn parse_roster(html: &str, url: &str) -> Result<Dataset, AppError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table#roster_grid, table.mytable");
    let header_sel = selector("thead th");
    let row_sel = selector("tbody tr");
    let cell_sel = selector("td");
    let anchor_sel = selector("a[href]");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| AppError::page_structure("could not find roster table", url))?;

    let headers: Vec<String> = table.select(&header_sel).map(|th| element_text(&th)).collect();
    let name_col = headers
        .iter()
        .position(|h| h == "Name")
        .ok_or_else(|| AppError::page_structure("roster table has no Name column", url))?;
    let jersey_col = headers.iter().position(|h| h == "Jersey" || h == "#");
    let position_col = headers.iter().position(|h| h == "Position" || h == "Pos");
    let year_col = headers.iter().position(|h| h == "Year" || h == "Class");

    let mut dataset = Dataset::new(vec![
        "player_id",
        "player_name",
        "jersey",
        "position",
        "class_year",
    ]);
    for row in table.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        let Some(name_cell) = cells.get(name_col) else {
            continue;
        };

        let player_id = name_cell
            .select(&anchor_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(extract_entity_id)
            .map(|id| id.to_string())
            .unwrap_or_default();
        let raw_name = element_text(name_cell);
        let player_name = normalize_name(Some(&raw_name)).unwrap_or_default();

        let cell_at = |col: Option<usize>| {
            col.and_then(|i| cells.get(i))
                .map(element_text)
                .unwrap_or_default()
        };

        dataset.push_row(vec![
            player_id,
            player_name,
            cell_at(jersey_col),
            cell_at(position_col),
            cell_at(year_col),
        ]);
    }

    debug!("Parsed {} roster entries from {url}", dataset.len());
    Ok(dataset)
}

/// Parses the schedule table on a team page. The opponent and contest
/// IDs come from each row's anchors; rows without a date cell are
/// skipped.
pub fn parse_schedule(html: &str, url: &str) -> Result<Dataset, AppError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table.mytable");
    let row_sel = selector("tbody tr");
    let cell_sel = selector("td");
    let anchor_sel = selector("a[href]");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| AppError::page_structure("could not find schedule table", url))?;

    let mut dataset = Dataset::new(vec![
        "date",
        "opponent_id",
        "opponent_name",
        "result",
        "contest_id",
    ]);
    for row in table.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() < 3 {
            continue;
        }

        let date = element_text(&cells[0]);
        if date.is_empty() {
            continue;
        }

        let opponent_anchor = cells[1].select(&anchor_sel).next();
        let opponent_id = opponent_anchor
            .and_then(|a| a.value().attr("href"))
            .and_then(extract_entity_id)
            .map(|id| id.to_string())
            .unwrap_or_default();
        let opponent_name = opponent_anchor
            .map(|a| element_text(&a))
            .unwrap_or_else(|| element_text(&cells[1]));

        let result_cell = &cells[2];
        let contest_id = result_cell
            .select(&anchor_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(extract_entity_id)
            .map(|id| id.to_string())
            .unwrap_or_default();

        dataset.push_row(vec![
            date,
            opponent_id,
            opponent_name,
            element_text(result_cell),
            contest_id,
        ]);
    }

    debug!("Parsed {} schedule rows from {url}", dataset.len());
    Ok(dataset)
}

/// Parses the season stat grid. Column headers come from the page
/// verbatim, prefixed with a `player_id` column; the player column is
/// canonicalized through the name normalizer.
pub fn parse_stat_grid(html: &str, url: &str) -> Result<Dataset, AppError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table#stat_grid");
    let header_sel = selector("thead th");
    let row_sel = selector("tbody tr");
    let cell_sel = selector("td");
    let anchor_sel = selector("a[href]");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| AppError::page_structure("could not find stat grid table", url))?;

    let page_headers: Vec<String> =
        table.select(&header_sel).map(|th| element_text(&th)).collect();
    if page_headers.is_empty() {
        return Err(AppError::page_structure("stat grid has no header row", url));
    }
    let player_col = page_headers.iter().position(|h| h == "Player");

    let mut headers = vec!["player_id".to_string()];
    headers.extend(page_headers.iter().cloned());
    let mut dataset = Dataset {
        headers,
        rows: Vec::new(),
    };

    for row in table.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() != page_headers.len() {
            continue;
        }

        let player_id = player_col
            .and_then(|i| cells[i].select(&anchor_sel).next())
            .and_then(|a| a.value().attr("href"))
            .and_then(extract_entity_id)
            .map(|id| id.to_string())
            .unwrap_or_default();

        let mut out_row = vec![player_id];
        for (i, cell) in cells.iter().enumerate() {
            let text = element_text(cell);
            if Some(i) == player_col {
                out_row.push(normalize_name(Some(&text)).unwrap_or_default());
            } else {
                out_row.push(text);
            }
        }
        dataset.rows.push(out_row);
    }

    debug!("Parsed {} stat rows from {url}", dataset.len());
    Ok(dataset)
}
