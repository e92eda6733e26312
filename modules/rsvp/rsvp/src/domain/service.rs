use std::sync::Arc;

use rsvp_sdk::{NewRsvp, Rsvp, RsvpStats};
use tracing::{debug, info, instrument, warn};

use super::error::DomainError;
use super::events::RsvpDomainEvent;
use super::name::ValidName;
use super::ports::EventPublisher;
use super::repo::{NewRecord, RsvpRepository, StoreError};

pub struct ServiceConfig {
    pub max_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
        }
    }
}

/// Submission workflow and statistics reader over an [`RsvpRepository`].
pub struct Service {
    repo: Arc<dyn RsvpRepository>,
    events: Arc<dyn EventPublisher<RsvpDomainEvent>>,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn RsvpRepository>,
        events: Arc<dyn EventPublisher<RsvpDomainEvent>>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            events,
            config,
        }
    }

    /// Validate, de-duplicate and persist one submission.
    ///
    /// Writes at most one record and never retries a failed store call.
    #[instrument(skip(self, new_rsvp), fields(attending = new_rsvp.attending))]
    pub async fn submit(&self, new_rsvp: NewRsvp) -> Result<Rsvp, DomainError> {
        let name = ValidName::parse(&new_rsvp.name, self.config.max_name_length).inspect_err(
            |e| debug!(error = %e, "Rejected RSVP name"),
        )?;

        self.ensure_name_unused(name.normalized()).await?;

        let (display_name, normalized_name) = name.into_parts();
        let record = NewRecord {
            display_name,
            normalized_name: normalized_name.clone(),
            attending: new_rsvp.attending,
        };

        let rsvp = match self.repo.insert(record).await {
            Ok(rsvp) => rsvp,
            Err(StoreError::Duplicate) => {
                // lost the race against a concurrent submission of the same name
                warn!(normalized_name = %normalized_name, "Duplicate caught by unique index");
                return Err(DomainError::duplicate_name(normalized_name));
            }
            Err(StoreError::Backend(e)) => return Err(DomainError::StoreUnavailable(e)),
        };

        info!(id = %rsvp.id, "RSVP accepted");
        self.events.publish(&RsvpDomainEvent::Created {
            id: rsvp.id,
            display_name: rsvp.display_name.clone(),
            attending: rsvp.attending,
            at: rsvp.created_at,
        });

        Ok(rsvp)
    }

    /// Every record, newest first. Fails as a whole; never returns a partial list.
    pub async fn list_all(&self) -> Result<Vec<Rsvp>, DomainError> {
        let rsvps = self.repo.list_all_desc().await?;
        debug!(count = rsvps.len(), "Listed RSVPs");
        Ok(rsvps)
    }

    pub async fn stats(&self) -> Result<RsvpStats, DomainError> {
        let rsvps = self.list_all().await?;
        Ok(tally(rsvps))
    }

    async fn ensure_name_unused(&self, normalized_name: &str) -> Result<(), DomainError> {
        if self
            .repo
            .find_by_normalized_name(normalized_name)
            .await?
            .is_some()
        {
            debug!(normalized_name, "RSVP name already taken");
            return Err(DomainError::duplicate_name(normalized_name));
        }
        Ok(())
    }
}

/// Attendance counts by a single pass over `rsvps`.
#[must_use]
pub fn tally(rsvps: Vec<Rsvp>) -> RsvpStats {
    let attending = rsvps.iter().filter(|r| r.attending).count();
    RsvpStats {
        total: rsvps.len(),
        attending,
        not_attending: rsvps.len() - attending,
        rsvps,
    }
}
