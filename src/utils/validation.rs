use crate::utils::error::{LedgerError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::InvalidConfigValueError {
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
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than or equal to 0".to_string(),
        });
    }
    Ok(())
}

/// Labels compare ASCII case-insensitively, matching how grade keys resolve.
pub fn validate_unique_labels<'a, I>(field_name: &str, labels: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for label in labels {
        let key = label.trim().to_ascii_uppercase();
        if !seen.insert(key) {
            return Err(LedgerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: label.to_string(),
                reason: "Duplicate grade label".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("ledger.placeholder_name", "N/A").is_ok());
        assert!(validate_non_empty_string("ledger.placeholder_name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("ledger.precision", 2usize, 0, 4).is_ok());
        assert!(validate_range("ledger.precision", 5usize, 0, 4).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("grades.points", 0.0).is_ok());
        assert!(validate_non_negative("grades.points", -0.5).is_err());
        assert!(validate_non_negative("grades.points", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_unique_labels() {
        assert!(validate_unique_labels("grades", ["A", "A-", "B"]).is_ok());
        assert!(validate_unique_labels("grades", ["A", "b", "a"]).is_err());
    }
}
