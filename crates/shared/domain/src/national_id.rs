//! National id value object.
//!
//! Used both for the account login identifier and for dependents'
//! national codes. Compared by value, validated on construction.

use serde::{Deserialize, Serialize};

use crate::constants::NATIONAL_ID_LENGTH;
use crate::error::{DomainError, DomainResult};

/// A validated 10-digit national id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalId(String);

impl NationalId {
    /// Create a national id from raw input.
    ///
    /// # Errors
    /// Returns a validation error unless the input is exactly ten ASCII
    /// digits.
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.len() != NATIONAL_ID_LENGTH {
            return Err(DomainError::validation(format!(
                "National id must be exactly {} digits",
                NATIONAL_ID_LENGTH
            )));
        }

        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(
                "National id must contain only digits",
            ));
        }

        Ok(Self(raw.to_string()))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value object and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NationalId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits() {
        assert!(NationalId::new("0012345678").is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(NationalId::new("123456789").is_err());
        assert!(NationalId::new("12345678901").is_err());
        assert!(NationalId::new("").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(NationalId::new("12345a7890").is_err());
        assert!(NationalId::new("۱۲۳۴۵۶۷۸۹۰").is_err());
    }
}
