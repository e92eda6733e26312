/// Output port for domain events.
pub trait EventPublisher<E>: Send + Sync + 'static {
    fn publish(&self, event: &E);
}

/// Publisher that drops every event; used when no live feed is mounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventPublisher;

impl<E> EventPublisher<E> for NoopEventPublisher {
    fn publish(&self, _event: &E) {}
}
