//! Validation error types

use std::fmt;

use serde_json::Value;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is present but empty
    Empty { field: &'static str },

    /// Required field is absent
    Missing { field: &'static str },

    /// Value has the wrong shape (e.g., non-numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Read an `i32` sent either as a JSON integer or as a numeric string.
pub fn integer_from_json(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    n.and_then(|n| i32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "quiz_category" };
        assert_eq!(err.to_string(), "quiz_category is required");

        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");
    }

    #[test]
    fn integers_from_numbers_or_strings() {
        assert_eq!(integer_from_json(&json!(4)), Some(4));
        assert_eq!(integer_from_json(&json!(" 12 ")), Some(12));
        assert_eq!(integer_from_json(&json!("two")), None);
        assert_eq!(integer_from_json(&json!(2.5)), None);
        assert_eq!(integer_from_json(&json!(false)), None);
        assert_eq!(integer_from_json(&json!(i64::MAX)), None);
    }
}
