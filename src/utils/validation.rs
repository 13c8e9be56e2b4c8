use crate::utils::error::{SubscriberError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SubscriberError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(SubscriberError::validation(
            field_name,
            value,
            "Value cannot be negative",
        ));
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
        return Err(SubscriberError::validation(
            field_name,
            value,
            &format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SubscriberError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(SubscriberError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("email", "a@b.c").is_ok());
        assert!(validate_non_empty_string("email", "").is_err());
        assert!(validate_non_empty_string("email", " \t\n").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("months_remaining", 0).is_ok());
        assert!(validate_non_negative("months_remaining", 12).is_ok());
        assert!(validate_non_negative("months_remaining", -1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("extend_months", 0, 0, 10).is_ok());
        assert!(validate_range("extend_months", 10, 0, 10).is_ok());
        assert!(validate_range("extend_months", 11, 0, 10).is_err());
        assert!(validate_range("extend_months", -1, 0, 10).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("seed", "fixtures/seed.toml").is_ok());
        assert!(validate_path("seed", "").is_err());
        assert!(validate_path("seed", "bad\0path").is_err());
    }
}
