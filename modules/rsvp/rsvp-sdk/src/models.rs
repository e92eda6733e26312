//! Public models for the rsvp module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the rsvp module and its consumers.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::RsvpError;

/// A persisted attendance confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    pub id: Uuid,
    /// Whitespace-collapsed name with the guest's casing preserved.
    pub display_name: String,
    /// Lower-cased `display_name`; unique across all records.
    pub normalized_name: String,
    pub attending: bool,
    pub created_at: OffsetDateTime,
}

/// Submission input as entered in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    pub name: String,
    pub attending: bool,
}

impl NewRsvp {
    #[must_use]
    pub fn new(name: impl Into<String>, attending: bool) -> Self {
        Self {
            name: name.into(),
            attending,
        }
    }
}

/// Attendance totals plus the records they were computed from.
///
/// `attending + not_attending == total` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RsvpStats {
    pub total: usize,
    pub attending: usize,
    pub not_attending: usize,
    /// Newest first.
    pub rsvps: Vec<Rsvp>,
}

/// Tagged result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    EmptyName,
    InvalidFormat,
    DuplicateName,
    StoreUnavailable,
    Accepted { attending: bool },
}

impl SubmissionOutcome {
    /// Stable snake_case identifier, also used as the problem `code`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::InvalidFormat => "invalid_format",
            Self::DuplicateName => "duplicate_name",
            Self::StoreUnavailable => "store_unavailable",
            Self::Accepted { .. } => "accepted",
        }
    }

    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl From<&RsvpError> for SubmissionOutcome {
    fn from(err: &RsvpError) -> Self {
        match err {
            RsvpError::EmptyName => Self::EmptyName,
            RsvpError::InvalidFormat { .. } => Self::InvalidFormat,
            RsvpError::DuplicateName { .. } => Self::DuplicateName,
            RsvpError::StoreUnavailable => Self::StoreUnavailable,
        }
    }
}

impl From<&Result<Rsvp, RsvpError>> for SubmissionOutcome {
    fn from(result: &Result<Rsvp, RsvpError>) -> Self {
        match result {
            Ok(rsvp) => Self::Accepted {
                attending: rsvp.attending,
            },
            Err(err) => err.into(),
        }
    }
}
