use crate::utils::error::{ReactiveError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReactiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ReactiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_known_names(field_name: &str, names: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in names {
        if !known_set.contains(name.as_str()) {
            return Err(ReactiveError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!("Unknown name. Valid names: {}", known.join(", ")),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReactiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("harness.delay_ms", 1000u64, 0, 60_000).is_ok());
        assert!(validate_range("harness.delay_ms", 0u64, 0, 60_000).is_ok());
        assert!(validate_range("harness.delay_ms", 60_001u64, 0, 60_000).is_err());
    }

    #[test]
    fn test_validate_known_names() {
        let names = vec!["mono".to_string(), "flux".to_string()];
        assert!(validate_known_names("harness.scenarios", &names, &["mono", "flux", "flux-delay"]).is_ok());

        let invalid = vec!["monad".to_string()];
        let err = validate_known_names("harness.scenarios", &invalid, &["mono"]).unwrap_err();
        assert!(err.to_string().contains("monad"));
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty_list::<u8>("fixtures", &[]).is_err());
        assert!(validate_non_empty_list("fixtures", &[1]).is_ok());
        assert!(validate_non_empty_string("filters.first_name", "  ").is_err());
        assert!(validate_non_empty_string("filters.first_name", "Harry").is_ok());
    }
}
