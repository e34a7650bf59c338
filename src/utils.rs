use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime};

use crate::domain::errors::DomainError;

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders an ISO-8601 / RFC 3339 date-time string with a strftime pattern.
pub fn format_datetime(value: &str, pattern: &str) -> Result<String, DomainError> {
    let parsed = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_utc()))
        .map_err(|_| {
            DomainError::InvalidArgument(format!("{value} is not a valid date-time value"))
        })?;
    Ok(parsed.format(pattern).to_string())
}

pub fn validate_membership<T>(value: &T, allowed: &[T]) -> Result<(), DomainError>
where
    T: PartialEq + Display,
{
    if !allowed.contains(value) {
        return Err(DomainError::InvalidArgument(format!(
            "{value} is not an allowed value"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DATETIME_FORMAT, format_datetime, validate_membership};
    use crate::domain::errors::DomainError;

    #[test]
    fn formats_with_default_pattern() {
        let rendered = format_datetime("2024-01-01T00:00:00", DEFAULT_DATETIME_FORMAT).unwrap();
        assert_eq!(rendered, "2024-01-01 00:00:00");
    }

    #[test]
    fn formats_rfc3339_input() {
        let rendered = format_datetime("2024-06-15T12:30:45+00:00", "%H:%M").unwrap();
        assert_eq!(rendered, "12:30");
    }

    #[test]
    fn rejects_non_datetime_value() {
        let err = format_datetime("not a date", DEFAULT_DATETIME_FORMAT).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn accepts_member_of_allowed_set() {
        assert!(validate_membership(&"b", &["a", "b", "c"]).is_ok());
    }

    #[test]
    fn rejects_value_outside_allowed_set() {
        let err = validate_membership(&"z", &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
}
