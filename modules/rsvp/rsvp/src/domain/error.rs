use rsvp_sdk::RsvpError;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid name format: {reason}")]
    InvalidFormat { reason: String },

    #[error("An RSVP for '{normalized_name}' already exists")]
    DuplicateName { normalized_name: String },

    #[error("RSVP store unavailable: {0:#}")]
    StoreUnavailable(#[from] anyhow::Error),
}

impl DomainError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub fn duplicate_name(normalized_name: impl Into<String>) -> Self {
        Self::DuplicateName {
            normalized_name: normalized_name.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for RsvpError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::EmptyName => RsvpError::EmptyName,
            DomainError::InvalidFormat { reason } => RsvpError::invalid_format(reason),
            DomainError::DuplicateName { normalized_name } => {
                RsvpError::duplicate_name(normalized_name)
            }
            DomainError::StoreUnavailable(e) => {
                tracing::error!(error = ?e, "RSVP store unavailable");
                RsvpError::StoreUnavailable
            }
        }
    }
}
