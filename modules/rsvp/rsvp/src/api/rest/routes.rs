use std::sync::Arc;

use anon_auth::{AnonymousIssuer, require_session};
use axum::{
    Extension, Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::domain::service::Service;

use super::handlers;
use super::sse::RsvpBroadcaster;

/// Mount the RSVP routes. Every route requires an anonymous session.
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    sse: RsvpBroadcaster,
    issuer: Arc<AnonymousIssuer>,
) -> Router {
    let rsvp_routes = Router::new()
        .route(
            "/rsvp/v1/rsvps",
            post(handlers::submit_rsvp).get(handlers::list_rsvps),
        )
        .route("/rsvp/v1/stats", get(handlers::get_stats))
        .route("/rsvp/v1/rsvps/events", get(handlers::rsvp_events))
        .layer(Extension(service))
        .layer(Extension(sse))
        .route_layer(from_fn_with_state(issuer, require_session));

    router.merge(rsvp_routes)
}
