use rsvp_sdk::{NewRsvp, Rsvp, RsvpStats};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// REST DTO for a stored RSVP
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RsvpDto {
    pub id: Uuid,
    pub display_name: String,
    pub normalized_name: String,
    pub attending: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// REST DTO for submitting an RSVP
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitRsvpReq {
    /// Full name as typed by the guest.
    pub name: String,
    /// Defaults to `true` when omitted, matching the form's preselected option.
    #[serde(default = "default_attending")]
    #[schema(default = true)]
    pub attending: bool,
}

fn default_attending() -> bool {
    true
}

/// Successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionDto {
    /// Always `accepted`; rejections are returned as problem documents.
    pub outcome: String,
    pub rsvp: RsvpDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RsvpStatsDto {
    pub total: usize,
    pub attending: usize,
    pub not_attending: usize,
    /// Newest first.
    pub rsvps: Vec<RsvpDto>,
}

/// Live feed payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RsvpEvent {
    pub kind: String,
    pub id: Uuid,
    pub display_name: String,
    pub attending: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl From<Rsvp> for RsvpDto {
    fn from(r: Rsvp) -> Self {
        Self {
            id: r.id,
            display_name: r.display_name,
            normalized_name: r.normalized_name,
            attending: r.attending,
            created_at: r.created_at,
        }
    }
}

impl From<SubmitRsvpReq> for NewRsvp {
    fn from(req: SubmitRsvpReq) -> Self {
        Self {
            name: req.name,
            attending: req.attending,
        }
    }
}

impl From<RsvpStats> for RsvpStatsDto {
    fn from(s: RsvpStats) -> Self {
        Self {
            total: s.total,
            attending: s.attending,
            not_attending: s.not_attending,
            rsvps: s.rsvps.into_iter().map(Into::into).collect(),
        }
    }
}
