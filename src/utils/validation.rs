use crate::utils::error::{Result, SajuError};
use chrono::NaiveDate;
use url::Url;

pub const MIN_SUPPORTED_YEAR: i32 = 1900;
pub const MAX_SUPPORTED_YEAR: i32 = 2030;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str, schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(SajuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) if schemes.contains(&url.scheme()) => Ok(()),
        Ok(url) => Err(SajuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!(
                "Unsupported URL scheme: {}. Expected one of: {}",
                url.scheme(),
                schemes.join(", ")
            ),
        }),
        Err(e) => Err(SajuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_http_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str, &["http", "https"])
}

pub fn validate_ws_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str, &["ws", "wss"])
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SajuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SajuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SajuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// The calculators accept any year; this is the range the content is written for.
pub fn validate_birth_year(year: i32) -> Result<()> {
    validate_range("year", year, MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR)
}

pub fn validate_birth_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| SajuError::ValidationError {
        message: format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
    })
}

/// Month and day without a year; Feb 29 is allowed.
pub fn validate_month_day(month: u32, day: u32) -> Result<()> {
    // 2000 is a leap year
    NaiveDate::from_ymd_opt(2000, month, day)
        .map(|_| ())
        .ok_or_else(|| SajuError::ValidationError {
            message: format!("{:02}-{:02} is not a valid month and day", month, day),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_http_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_http_url("api.base_url", "http://localhost:8000").is_ok());
        assert!(validate_http_url("api.base_url", "").is_err());
        assert!(validate_http_url("api.base_url", "invalid-url").is_err());
        assert!(validate_http_url("api.base_url", "ws://example.com").is_err());

        assert!(validate_ws_url("monitor.ws_url", "ws://localhost:8000/ws/monitor").is_ok());
        assert!(validate_ws_url("monitor.ws_url", "wss://example.com/ws/monitor").is_ok());
        assert!(validate_ws_url("monitor.ws_url", "https://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("monitor.channel_capacity", 5, 1).is_ok());
        assert!(validate_positive_number("monitor.channel_capacity", 0, 1).is_err());
    }

    #[test]
    fn test_validate_birth_year() {
        assert!(validate_birth_year(1900).is_ok());
        assert!(validate_birth_year(2030).is_ok());
        assert!(validate_birth_year(1899).is_err());
        assert!(validate_birth_year(2031).is_err());
    }

    #[test]
    fn test_validate_birth_date() {
        assert!(validate_birth_date(2000, 2, 29).is_ok());
        assert!(validate_birth_date(1999, 2, 29).is_err());
        assert!(validate_birth_date(1999, 13, 1).is_err());
        assert!(validate_birth_date(1999, 4, 31).is_err());
    }

    #[test]
    fn test_validate_month_day() {
        assert!(validate_month_day(2, 29).is_ok());
        assert!(validate_month_day(12, 31).is_ok());
        assert!(validate_month_day(2, 30).is_err());
        assert!(validate_month_day(0, 1).is_err());
        assert!(validate_month_day(4, 31).is_err());
    }
}
