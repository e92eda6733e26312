//! Local implementation of `RsvpApi`.
//!
//! Used by in-process consumers. It delegates to the domain service and
//! converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use rsvp_sdk::{NewRsvp, Rsvp, RsvpApi, RsvpError, RsvpStats};

use crate::domain::service::Service;

pub struct RsvpLocalClient {
    service: Arc<Service>,
}

impl RsvpLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RsvpApi for RsvpLocalClient {
    async fn submit(&self, new_rsvp: NewRsvp) -> Result<Rsvp, RsvpError> {
        self.service.submit(new_rsvp).await.map_err(Into::into)
    }

    async fn list_all(&self) -> Result<Vec<Rsvp>, RsvpError> {
        self.service.list_all().await.map_err(Into::into)
    }

    async fn stats(&self) -> Result<RsvpStats, RsvpError> {
        self.service.stats().await.map_err(Into::into)
    }
}
