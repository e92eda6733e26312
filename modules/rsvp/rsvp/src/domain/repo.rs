use async_trait::async_trait;
use rsvp_sdk::Rsvp;
use thiserror::Error;

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub display_name: String,
    pub normalized_name: String,
    pub attending: bool,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already holds this normalized name.
    #[error("normalized name already stored")]
    Duplicate,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn find_by_normalized_name(&self, normalized_name: &str) -> anyhow::Result<Option<Rsvp>>;

    async fn insert(&self, record: NewRecord) -> Result<Rsvp, StoreError>;

    /// Every record, `created_at` descending with ties broken by `id` descending.
    async fn list_all_desc(&self) -> anyhow::Result<Vec<Rsvp>>;
}
