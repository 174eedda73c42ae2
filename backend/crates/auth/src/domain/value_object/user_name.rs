//! User Name Value Object
//!
//! Free-form display name. Trimmed, never blank.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be at most {USER_NAME_MAX_LENGTH} characters")]
    TooLong,

    #[error("Name contains invalid control characters")]
    InvalidCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(UserNameError::Empty);
        }
        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }
        if name.chars().any(char::is_control) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(name.to_string()))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_trimmed() {
        assert_eq!(UserName::new("  Alice ").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_user_name_invalid() {
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
        assert_eq!(UserName::new("a".repeat(101)), Err(UserNameError::TooLong));
        assert_eq!(UserName::new("Al\u{0000}ice"), Err(UserNameError::InvalidCharacter));
    }
}
