//! Live RSVP feed over Server-Sent Events.

use std::convert::Infallible;

use axum::response::sse::{Event, KeepAlive, KeepAliveStream, Sse};
use futures::future;
use futures::stream::{BoxStream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::domain::events::RsvpDomainEvent;
use crate::domain::ports::EventPublisher;

use super::dto::RsvpEvent;

type EventStream = BoxStream<'static, Result<Event, Infallible>>;

/// Fan-out of [`RsvpEvent`]s to any number of subscribers.
///
/// Cloning shares the channel. A subscriber that falls more than `capacity`
/// events behind skips the ones it missed.
#[derive(Clone)]
pub struct RsvpBroadcaster {
    tx: broadcast::Sender<RsvpEvent>,
}

impl RsvpBroadcaster {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn send(&self, event: RsvpEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("No live feed subscribers");
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    #[must_use]
    pub fn subscribe_stream(&self) -> BoxStream<'static, RsvpEvent> {
        BroadcastStream::new(self.tx.subscribe())
            .filter_map(|item| {
                future::ready(match item {
                    Ok(event) => Some(event),
                    Err(e) => {
                        tracing::warn!(error = %e, "Live feed subscriber lagged");
                        None
                    }
                })
            })
            .boxed()
    }

    #[must_use]
    pub fn sse_response(&self) -> Sse<KeepAliveStream<EventStream>> {
        let events = self
            .subscribe_stream()
            .filter_map(|event| {
                future::ready(match Event::default().event("rsvp").json_data(&event) {
                    Ok(ev) => Some(Ok(ev)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to encode live feed event");
                        None
                    }
                })
            })
            .boxed();

        Sse::new(events).keep_alive(KeepAlive::default())
    }
}

/// Bridges domain events onto the live feed.
pub struct SseRsvpEventPublisher {
    sse: RsvpBroadcaster,
}

impl SseRsvpEventPublisher {
    #[must_use]
    pub fn new(sse: RsvpBroadcaster) -> Self {
        Self { sse }
    }
}

impl EventPublisher<RsvpDomainEvent> for SseRsvpEventPublisher {
    fn publish(&self, event: &RsvpDomainEvent) {
        let RsvpDomainEvent::Created {
            id,
            display_name,
            attending,
            at,
        } = event;

        self.sse.send(RsvpEvent {
            kind: "created".to_owned(),
            id: *id,
            display_name: display_name.clone(),
            attending: *attending,
            at: *at,
        });
    }
}
