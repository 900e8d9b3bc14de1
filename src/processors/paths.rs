//! Folder path string normalization for cache file placement.

/// Normalizes a folder path string for cross-platform cache placement.
///
/// Backslashes become forward slashes, then doubled separators collapse
/// in a single non-overlapping pass: each "//" becomes "/" once, so a
/// tripled separator leaves a doubled one behind. A trailing separator
/// is preserved, the empty string maps to itself and a lone separator
/// maps to itself.
///
/// # Examples
/// ```
/// use ncaa_stats::processors::format_folder_str;
///
/// assert_eq!(format_folder_str("C:\\Users\\stats\\cache"), "C:/Users/stats/cache");
/// assert_eq!(format_folder_str("/path/to/folder/"), "/path/to/folder/");
/// assert_eq!(format_folder_str("a//b"), "a/b");
/// ```
pub fn format_folder_str(path: &str) -> String {
    path.replace('\\', "/").replace("//", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_become_forward_slashes() {
        assert_eq!(
            format_folder_str("C:\\Users\\stats\\cache"),
            "C:/Users/stats/cache"
        );
    }

    #[test]
    fn test_trailing_separator_is_preserved() {
        assert!(format_folder_str("/path/to/folder/").ends_with('/'));
        assert_eq!(format_folder_str("/path/to/folder/"), "/path/to/folder/");
    }

    #[test]
    fn test_empty_string_maps_to_itself() {
        assert_eq!(format_folder_str(""), "");
    }

    #[test]
    fn test_lone_separator_maps_to_itself() {
        assert_eq!(format_folder_str("/"), "/");
        assert_eq!(format_folder_str("\\"), "/");
    }

    #[test]
    fn test_doubled_separator_collapses_once() {
        assert_eq!(format_folder_str("a//b"), "a/b");
        assert_eq!(format_folder_str("//"), "/");
    }

    #[test]
    fn test_tripled_separator_collapses_to_doubled() {
        // Single-pass collapse: "///" contains one non-overlapping "//"
        assert_eq!(format_folder_str("a///b"), "a//b");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(format_folder_str("cache\\\\teams/2025"), "cache/teams/2025");
    }
}
