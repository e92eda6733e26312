//! Error types for the rsvp SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsvpError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid name format: {message}")]
    InvalidFormat { message: String },

    #[error("An RSVP for '{normalized_name}' already exists")]
    DuplicateName { normalized_name: String },

    #[error("RSVP store is unavailable")]
    StoreUnavailable,
}

impl RsvpError {
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn duplicate_name(normalized_name: impl Into<String>) -> Self {
        Self::DuplicateName {
            normalized_name: normalized_name.into(),
        }
    }
}
