use crate::error::AppError;

/// Validates configuration values before they are used anywhere.
///
/// The site domain must be non-empty and look like a host (a dot or a
/// localhost address); a custom log file path, when present, must be
/// non-empty.
pub fn validate_config(site_domain: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    let domain = site_domain
        .trim_start_matches("https://")
        .trim_start_matches("http://");

    if domain.is_empty() {
        return Err(AppError::config_error("Site domain must not be empty"));
    }

    let host = domain.split(['/', ':']).next().unwrap_or("");
    if !host.contains('.') && host != "localhost" {
        return Err(AppError::config_error(format!(
            "Site domain '{site_domain}' does not look like a valid host"
        )));
    }

    if let Some(path) = log_file_path
        && path.is_empty()
    {
        return Err(AppError::config_error(
            "Log file path must not be empty when set",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(validate_config("https://stats.ncaa.org", &None).is_ok());
        assert!(validate_config("stats.ncaa.org", &None).is_ok());
        assert!(validate_config("http://localhost:8080", &None).is_ok());
        assert!(validate_config("localhost", &None).is_ok());
    }

    #[test]
    fn test_empty_domain_is_invalid() {
        assert!(validate_config("", &None).is_err());
        assert!(validate_config("https://", &None).is_err());
    }

    #[test]
    fn test_bare_word_domain_is_invalid() {
        assert!(validate_config("invalid_domain", &None).is_err());
    }

    #[test]
    fn test_log_file_path_rules() {
        assert!(validate_config("stats.ncaa.org", &Some("/tmp/x.log".to_string())).is_ok());
        assert!(validate_config("stats.ncaa.org", &Some(String::new())).is_err());
    }
}
