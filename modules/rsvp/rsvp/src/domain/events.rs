use time::OffsetDateTime;
use uuid::Uuid;

/// Transport-agnostic domain event.
#[derive(Debug, Clone)]
pub enum RsvpDomainEvent {
    Created {
        id: Uuid,
        display_name: String,
        attending: bool,
        at: OffsetDateTime,
    },
}
