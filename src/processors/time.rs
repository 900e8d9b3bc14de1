//! Conversion between "M:SS" clock-time text and integer seconds.
//!
//! Box-score pages publish time-on-ice, time-in-goal and similar columns
//! as minute:second text; sport parsers convert them to seconds for
//! arithmetic and back for presentation.

/// Converts "M:SS" clock text into total seconds.
///
/// The split happens on the first colon, so the minutes component may
/// exceed two digits ("100:15" is a valid goalkeeper season total).
/// Malformed input is not an error, it is zero-duration: text without a
/// colon, or with an unparsable component, contributes 0.
///
/// # Examples
/// ```
/// use ncaa_stats::processors::seconds_from_time_str;
///
/// assert_eq!(seconds_from_time_str("5:30"), 330);
/// assert_eq!(seconds_from_time_str("100:15"), 6015);
/// assert_eq!(seconds_from_time_str("novalue"), 0);
/// ```
pub fn seconds_from_time_str(text: &str) -> u32 {
    match text.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes = minutes.trim().parse::<u32>().unwrap_or(0);
            let seconds = seconds.trim().parse::<u32>().unwrap_or(0);
            minutes * 60 + seconds
        }
        None => 0,
    }
}

/// Formats total seconds as "MM:SS" clock text.
///
/// The seconds component is always two digits; the minutes component is
/// padded to at least two digits and grows unbounded for large values
/// (no wraparound at the hour).
///
/// # Examples
/// ```
/// use ncaa_stats::processors::time_str_from_seconds;
///
/// assert_eq!(time_str_from_seconds(0), "00:00");
/// assert_eq!(time_str_from_seconds(330), "05:30");
/// assert_eq!(time_str_from_seconds(6015), "100:15");
/// ```
pub fn time_str_from_seconds(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
