//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Earliest year the service existed.
const MIN_FIRST_YEAR: i32 = 2000;

/// Latest year accepted as a crawl floor.
const MAX_FIRST_YEAR: i32 = 2100;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_host(&config.settings.host)?;
    validate_account(&config.user.account)?;
    validate_password(&config.user.password)?;
    validate_floor(config.settings.first_year, config.settings.first_month)?;

    Ok(())
}

/// Validate the host base URL.
pub fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(Error::MissingConfig("settings.host".to_string()));
    }

    if !host.starts_with("http://") && !host.starts_with("https://") {
        return Err(Error::ConfigValidation {
            field: "settings.host".to_string(),
            message: format!("Host must start with http:// or https:// (got '{}')", host),
        });
    }

    // Check for placeholder values
    let host_lower = host.to_lowercase();
    if host_lower.contains("replaceme") || host_lower.contains("example.com") {
        return Err(Error::ConfigValidation {
            field: "settings.host".to_string(),
            message: "Host appears to be a placeholder. Please provide the service URL."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the account ID.
///
/// The account is interpolated into URL paths and into the day-post
/// extraction pattern, so it is restricted to URL-safe characters.
pub fn validate_account(account: &str) -> Result<()> {
    if account.is_empty() {
        return Err(Error::MissingConfig("user.account".to_string()));
    }

    let account_pattern = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
    if !account_pattern.is_match(account) {
        return Err(Error::ConfigValidation {
            field: "user.account".to_string(),
            message: format!(
                "Account '{}' contains invalid characters. Only alphanumeric, hyphens, and underscores allowed.",
                account
            ),
        });
    }

    let lower = account.to_lowercase();
    if lower == "replaceme" || lower == "your_account" {
        return Err(Error::ConfigValidation {
            field: "user.account".to_string(),
            message: format!(
                "Account '{}' appears to be a placeholder. Please provide your account ID.",
                account
            ),
        });
    }

    Ok(())
}

/// Validate the password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::MissingConfig("user.password".to_string()));
    }

    Ok(())
}

/// Validate the crawl floor year and month.
pub fn validate_floor(first_year: i32, first_month: u32) -> Result<()> {
    if !(MIN_FIRST_YEAR..=MAX_FIRST_YEAR).contains(&first_year) {
        return Err(Error::ConfigValidation {
            field: "settings.first_year".to_string(),
            message: format!(
                "Year must be between {} and {} (got {})",
                MIN_FIRST_YEAR, MAX_FIRST_YEAR, first_year
            ),
        });
    }

    if !(1..=12).contains(&first_month) {
        return Err(Error::ConfigValidation {
            field: "settings.first_month".to_string(),
            message: format!("Month must be between 1 and 12 (got {})", first_month),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_host() {
        assert!(validate_host("http://my365.in").is_ok());
        assert!(validate_host("https://my365.in").is_ok());
    }

    #[test]
    fn invalid_host_scheme() {
        assert!(validate_host("my365.in").is_err());
        assert!(validate_host("ftp://my365.in").is_err());
    }

    #[test]
    fn invalid_host_placeholder() {
        assert!(validate_host("http://example.com").is_err());
    }

    #[test]
    fn valid_account() {
        assert!(validate_account("valid_user123").is_ok());
        assert!(validate_account("user-name").is_ok());
    }

    #[test]
    fn invalid_account_characters() {
        assert!(validate_account("user name").is_err());
        assert!(validate_account("user/../etc").is_err());
    }

    #[test]
    fn invalid_account_placeholder() {
        assert!(validate_account("replaceme").is_err());
    }

    #[test]
    fn empty_password_rejected() {
        assert!(validate_password("").is_err());
        assert!(validate_password("secret").is_ok());
    }

    #[test]
    fn floor_bounds() {
        assert!(validate_floor(2018, 12).is_ok());
        assert!(validate_floor(2018, 0).is_err());
        assert!(validate_floor(2018, 13).is_err());
        assert!(validate_floor(1999, 1).is_err());
        assert!(validate_floor(2101, 1).is_err());
    }
}
