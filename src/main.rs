// src/main.rs
mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::Args;
use ncaa_stats::config::Config;
use ncaa_stats::error::AppError;
use ncaa_stats::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(args.log_file.as_ref(), args.debug).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.is_noop() {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let config = Config::load().await?;

    if let Some(values) = &args.stat_id {
        commands::handle_stat_id_command(values)?;
    }

    if args.sports {
        commands::handle_sports_command();
    }

    if args.clear_cache {
        commands::handle_clear_cache_command(&config).await?;
    }

    if args.cache_info {
        commands::handle_cache_info_command(&config).await?;
    }

    if args.schools {
        commands::handle_schools_command(&config).await?;
    }

    if let Some(values) = &args.baseball_teams {
        commands::handle_baseball_teams_command(&config, values).await?;
    }

    Ok(())
}
