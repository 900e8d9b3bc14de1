//! Pure transformation routines shared by every sport module:
//! scraped-name canonicalization, clock-time conversion and cache
//! folder path normalization.

pub mod names;
pub mod paths;
pub mod time;

pub use names::normalize_name;
pub use paths::format_folder_str;
pub use time::{seconds_from_time_str, time_str_from_seconds};
