//! End-to-end tests over the public API: fetcher, cache, school
//! directory and baseball glue against a mock HTTP server.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ncaa_stats::cache::{FixedClock, TtlFileCache};
use ncaa_stats::error::AppError;
use ncaa_stats::fetcher::PageFetcher;
use ncaa_stats::schools::get_schools;
use ncaa_stats::sports::baseball::{
    get_baseball_player_season_batting_stats, get_baseball_team_roster, get_baseball_teams,
};
use ncaa_stats::sports::{DivisionLevel, SportContext};

const SCHOOLS_HTML: &str = r#"
    <html><body>
        <select name="org_id" id="org_id_select">
            <option value="">Select School</option>
            <option value="100">Test University</option>
            <option value="101">Sample College</option>
            <option value="999">Career</option>
            <option value="102">Z_Do_Not_Use_Old</option>
        </select>
    </body></html>
"#;

const TEAM_LIST_HTML: &str = r#"
    <html><body>
        <table><tbody>
            <tr><td><a href="/teams/100">Test University</a></td><td>Test Conference</td></tr>
            <tr><td><a href="/teams/101">Sample College</a></td><td>Sample Conference</td></tr>
        </tbody></table>
    </body></html>
"#;

const ROSTER_HTML: &str = r#"
    <html><body>
        <table id="roster_grid" class="mytable">
            <thead><tr>
                <th>Jersey</th><th>Name</th><th>Position</th><th>Year</th>
            </tr></thead>
            <tbody>
                <tr><td>1</td><td><a href="/players/1001">Doe, John</a></td><td>P</td><td>Jr.</td></tr>
            </tbody>
        </table>
    </body></html>
"#;

const STAT_GRID_HTML: &str = r#"
    <html><body>
        <table id="stat_grid">
            <thead><tr><th>Player</th><th>GP</th><th>BA</th></tr></thead>
            <tbody>
                <tr><td><a href="/players/1001">Doe, John</a></td><td>10</td><td>.300</td></tr>
            </tbody>
        </table>
    </body></html>
"#;

fn test_context(server: &MockServer, cache_dir: &TempDir) -> SportContext {
    let fetcher = PageFetcher::with_timeout(5).unwrap();
    let cache = TtlFileCache::with_root(cache_dir.path());
    SportContext::new(fetcher, cache, server.uri())
}

async fn mount_schools_page(server: &MockServer, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/teams/history"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SCHOOLS_HTML))
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn schools_are_fetched_filtered_and_cached() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    // The second lookup must come from the cache, not the server
    mount_schools_page(&server, 1).await;

    let ctx = test_context(&server, &cache_dir);
    let schools = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain)
        .await
        .unwrap();

    assert_eq!(schools.headers, vec!["school_id", "school_name"]);
    assert_eq!(
        schools.rows,
        vec![
            vec!["100", "Test University"],
            vec!["101", "Sample College"],
        ]
    );

    // Dataset landed on disk under the deterministic path
    assert!(ctx.cache.dataset_path("schools").exists());

    let again = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain)
        .await
        .unwrap();
    assert_eq!(again, schools);
}

#[tokio::test]
async fn stale_schools_cache_is_refreshed_once() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    mount_schools_page(&server, 2).await;

    let ctx = test_context(&server, &cache_dir);
    get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain)
        .await
        .unwrap();

    // Same cache directory viewed from 100 days in the future: past the
    // 90-day reference TTL, so the directory must be refetched
    let aged_cache = TtlFileCache::with_root(cache_dir.path()).with_clock(Arc::new(FixedClock(
        SystemTime::now() + Duration::from_secs(100 * 86_400),
    )));
    let aged_ctx = SportContext::new(
        PageFetcher::with_timeout(5).unwrap(),
        aged_cache,
        server.uri(),
    );
    let refreshed = get_schools(&aged_ctx.fetcher, &aged_ctx.cache, &aged_ctx.site_domain)
        .await
        .unwrap();
    assert_eq!(refreshed.len(), 2);
}

#[tokio::test]
async fn corrupt_schools_cache_degrades_to_refetch() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    mount_schools_page(&server, 1).await;

    let ctx = test_context(&server, &cache_dir);
    tokio::fs::write(ctx.cache.dataset_path("schools"), "school_id,school_name\n100\n")
        .await
        .unwrap();

    let schools = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain)
        .await
        .unwrap();
    assert_eq!(schools.len(), 2);
}

#[tokio::test]
async fn missing_dropdown_surfaces_structure_error() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/teams/history"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let ctx = test_context(&server, &cache_dir);
    let err = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PageStructure { .. }));
    assert!(
        err.to_string()
            .contains("could not find school selection dropdown")
    );

    // A failed fetch must not leave a cache file behind
    assert!(!ctx.cache.dataset_path("schools").exists());
}

#[tokio::test]
async fn baseball_teams_join_schools_and_cache_per_season() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    mount_schools_page(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/team/inst_team_list"))
        .and(query_param("sport_code", "MBA"))
        .and(query_param("academic_year", "2025"))
        .and(query_param("division", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEAM_LIST_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server, &cache_dir);
    let teams = get_baseball_teams(&ctx, 2025, DivisionLevel::One)
        .await
        .unwrap();

    assert_eq!(
        teams.rows,
        vec![
            vec!["100", "Test University", "100", "Test Conference"],
            vec!["101", "Sample College", "101", "Sample Conference"],
        ]
    );
    assert!(ctx.cache.dataset_path("baseball_teams_2025_I").exists());

    // Second call is served from the cache (mock expects one hit)
    let again = get_baseball_teams(&ctx, 2025, DivisionLevel::One)
        .await
        .unwrap();
    assert_eq!(again, teams);
}

#[tokio::test]
async fn roster_names_are_canonicalized() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/teams/100/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ROSTER_HTML))
        .mount(&server)
        .await;

    let ctx = test_context(&server, &cache_dir);
    let roster = get_baseball_team_roster(&ctx, 100).await.unwrap();
    assert_eq!(roster.rows, vec![vec!["1001", "John Doe", "1", "P", "Jr."]]);
}

#[tokio::test]
async fn season_stats_resolve_registry_id_into_url() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    // 15687 is the registered baseball/2025/batting endpoint ID; the
    // query param matcher fails the test if the registry is bypassed
    Mock::given(method("GET"))
        .and(path("/teams/100/season_to_date_stats"))
        .and(query_param("year_stat_category_id", "15687"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STAT_GRID_HTML))
        .mount(&server)
        .await;

    let ctx = test_context(&server, &cache_dir);
    let stats = get_baseball_player_season_batting_stats(&ctx, 100, 2025)
        .await
        .unwrap();

    assert_eq!(stats.headers, vec!["player_id", "Player", "GP", "BA"]);
    assert_eq!(stats.rows, vec![vec!["1001", "John Doe", "10", ".300"]]);
}

#[tokio::test]
async fn season_stats_for_unregistered_season_fail_before_any_request() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    // No mocks mounted: a request would 404 and fail differently

    let ctx = test_context(&server, &cache_dir);
    let err = get_baseball_player_season_batting_stats(&ctx, 100, 1900)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::StatIdNotFound { .. }));
}

#[tokio::test]
async fn http_error_classes_reach_sport_callers() {
    let server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/teams/999999/roster"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/500500/roster"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ctx = test_context(&server, &cache_dir);

    let not_found = get_baseball_team_roster(&ctx, 999_999).await.unwrap_err();
    assert!(matches!(
        not_found,
        AppError::PageClientError { status: 404, .. }
    ));
    assert!(!not_found.is_retryable());

    let server_err = get_baseball_team_roster(&ctx, 500_500).await.unwrap_err();
    assert!(matches!(
        server_err,
        AppError::PageServerError { status: 500, .. }
    ));
    assert!(server_err.is_retryable());
}
