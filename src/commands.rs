use ncaa_stats::cache::Dataset;
use ncaa_stats::config::Config;
use ncaa_stats::error::AppError;
use ncaa_stats::schools::get_schools;
use ncaa_stats::sports::baseball::get_baseball_teams;
use ncaa_stats::sports::{DivisionLevel, SportContext};
use ncaa_stats::stat_ids::{lookup_stat_id, seasons_for_sport, supported_sports};

/// Prints a dataset as tab-separated text with its header row.
fn print_dataset(dataset: &Dataset) {
    println!("{}", dataset.headers.join("\t"));
    for row in &dataset.rows {
        println!("{}", row.join("\t"));
    }
}

/// Handles `--stat-id SPORT SEASON CATEGORY`.
///
/// Prints the numeric endpoint ID, or surfaces the lookup failure so a
/// missing triple is visible instead of silently defaulted.
pub fn handle_stat_id_command(values: &[String]) -> Result<(), AppError> {
    let [sport, season, category] = values else {
        return Err(AppError::config_error(
            "--stat-id expects SPORT SEASON CATEGORY",
        ));
    };
    let season: i32 = season
        .parse()
        .map_err(|_| AppError::config_error(format!("invalid season '{season}'")))?;

    let stat_id = lookup_stat_id(sport, season, category)?;
    println!("{stat_id}");
    Ok(())
}

/// Handles `--sports`: lists registered sports with their seasons.
pub fn handle_sports_command() {
    for sport in supported_sports() {
        let seasons = seasons_for_sport(sport)
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{sport} ({seasons})");
    }
}

/// Handles `--schools`: prints the school directory, fetching and
/// caching it as needed.
pub async fn handle_schools_command(config: &Config) -> Result<(), AppError> {
    let ctx = SportContext::from_config(config)?;
    let schools = get_schools(&ctx.fetcher, &ctx.cache, &ctx.site_domain).await?;
    print_dataset(&schools);
    Ok(())
}

/// Handles `--baseball-teams SEASON LEVEL`.
pub async fn handle_baseball_teams_command(
    config: &Config,
    values: &[String],
) -> Result<(), AppError> {
    let [season, level] = values else {
        return Err(AppError::config_error(
            "--baseball-teams expects SEASON LEVEL",
        ));
    };
    let season: i32 = season
        .parse()
        .map_err(|_| AppError::config_error(format!("invalid season '{season}'")))?;
    let level: DivisionLevel = level.parse()?;

    let ctx = SportContext::from_config(config)?;
    let teams = get_baseball_teams(&ctx, season, level).await?;
    print_dataset(&teams);
    Ok(())
}

/// Handles `--cache-info`: lists cached datasets with age and size.
pub async fn handle_cache_info_command(config: &Config) -> Result<(), AppError> {
    let ctx = SportContext::from_config(config)?;
    let infos = ctx.cache.list().await?;

    if infos.is_empty() {
        println!("Cache is empty ({})", ctx.cache.root().display());
        return Ok(());
    }

    println!("Cached datasets under {}:", ctx.cache.root().display());
    for info in infos {
        println!(
            "  {:<32} {:>6} rows  {:>7.1} days old  (refreshed {})",
            info.key,
            info.row_count,
            info.age_days,
            info.refreshed.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

/// Handles `--clear-cache`.
pub async fn handle_clear_cache_command(config: &Config) -> Result<(), AppError> {
    let ctx = SportContext::from_config(config)?;
    let removed = ctx.cache.clear().await?;
    println!("Removed {removed} cached datasets");
    Ok(())
}
