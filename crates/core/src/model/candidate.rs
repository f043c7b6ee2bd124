use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must contain a local part, '@' and a domain: {raw}")]
    Malformed { raw: String },
}

/// Validated candidate email (trimmed, `local@domain`, no whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateEmail(String);

impl CandidateEmail {
    /// Create a validated candidate email.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Empty` if the value is blank, or
    /// `EmailError::Malformed` if it is not of the form `local@domain`.
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        let well_formed = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !trimmed.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !well_formed {
            return Err(EmailError::Malformed {
                raw: trimmed.to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CandidateEmail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
