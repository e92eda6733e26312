//! `RsvpApi` trait definition.

use async_trait::async_trait;

use crate::errors::RsvpError;
use crate::models::{NewRsvp, Rsvp, RsvpStats};

/// Public API of the rsvp module.
///
/// In-process consumers hold an `Arc<dyn RsvpApi>`; the REST layer exposes the
/// same operations over HTTP. No call is retried: a store failure surfaces
/// once as [`RsvpError::StoreUnavailable`].
#[async_trait]
pub trait RsvpApi: Send + Sync {
    /// Validate the name, reject duplicates, and persist a new record.
    async fn submit(&self, new_rsvp: NewRsvp) -> Result<Rsvp, RsvpError>;

    /// Every record, newest first.
    async fn list_all(&self) -> Result<Vec<Rsvp>, RsvpError>;

    /// Attendance counts over every record.
    async fn stats(&self) -> Result<RsvpStats, RsvpError>;
}
