use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NCAA statistics fetcher
///
/// Retrieves, caches and normalizes team and player statistics published
/// on stats.ncaa.org. Reference datasets (school directory, team lists)
/// land in a per-user file cache and are only refetched once stale.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Look up a numeric stat endpoint ID for a sport/season/category
    /// triple, e.g. `--stat-id baseball 2025 batting`.
    #[arg(
        long = "stat-id",
        num_args = 3,
        value_names = ["SPORT", "SEASON", "CATEGORY"],
        help_heading = "Lookups"
    )]
    pub stat_id: Option<Vec<String>>,

    /// List every sport registered in the stat ID table.
    #[arg(long = "sports", help_heading = "Lookups")]
    pub sports: bool,

    /// Print the school directory, fetching and caching it as needed.
    #[arg(long = "schools", help_heading = "Datasets")]
    pub schools: bool,

    /// List baseball teams for a season and division,
    /// e.g. `--baseball-teams 2025 I`.
    #[arg(
        long = "baseball-teams",
        num_args = 2,
        value_names = ["SEASON", "LEVEL"],
        help_heading = "Datasets"
    )]
    pub baseball_teams: Option<Vec<String>>,

    /// List cached datasets with their age and row counts.
    #[arg(long = "cache-info", short = 'i', help_heading = "Cache")]
    pub cache_info: bool,

    /// Delete every cached dataset.
    #[arg(long = "clear-cache", help_heading = "Cache")]
    pub clear_cache: bool,

    /// List current configuration settings.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write logs to a custom file path for this run.
    #[arg(long = "log-file", help_heading = "Configuration")]
    pub log_file: Option<String>,

    /// Mirror logs to stdout.
    #[arg(long, help_heading = "Configuration")]
    pub debug: bool,
}

impl Args {
    /// True when no operation flag was given and the CLI should print
    /// usage instead of silently doing nothing.
    pub fn is_noop(&self) -> bool {
        self.stat_id.is_none()
            && !self.sports
            && !self.schools
            && self.baseball_teams.is_none()
            && !self.cache_info
            && !self.clear_cache
            && !self.list_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_noop() {
        let args = Args::parse_from(["ncaa_stats"]);
        assert!(args.is_noop());
    }

    #[test]
    fn test_stat_id_takes_three_values() {
        let args = Args::parse_from(["ncaa_stats", "--stat-id", "baseball", "2025", "batting"]);
        assert_eq!(
            args.stat_id,
            Some(vec![
                "baseball".to_string(),
                "2025".to_string(),
                "batting".to_string()
            ])
        );
        assert!(!args.is_noop());
    }

    #[test]
    fn test_cache_flags() {
        let args = Args::parse_from(["ncaa_stats", "-i"]);
        assert!(args.cache_info);
        let args = Args::parse_from(["ncaa_stats", "--clear-cache"]);
        assert!(args.clear_cache);
    }

    #[test]
    fn test_baseball_teams_takes_two_values() {
        let args = Args::parse_from(["ncaa_stats", "--baseball-teams", "2025", "I"]);
        assert_eq!(
            args.baseball_teams,
            Some(vec!["2025".to_string(), "I".to_string()])
        );
    }
}
