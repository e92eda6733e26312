use std::sync::Arc;

use anon_auth::Session;
use axum::{
    Extension, Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
};
use problem_details::{ApiResult, Problem};
use tracing::{debug, info};

use crate::domain::service::Service;

use super::dto::{RsvpDto, RsvpEvent, RsvpStatsDto, SubmissionDto, SubmitRsvpReq};
use super::error::domain_error_to_problem;
use super::sse::RsvpBroadcaster;

/// Submit an RSVP
#[utoipa::path(
    post,
    path = "/rsvp/v1/rsvps",
    tag = "rsvp",
    request_body = SubmitRsvpReq,
    responses(
        (status = 201, description = "RSVP accepted", body = SubmissionDto),
        (status = 400, description = "Name is empty or the body is not JSON", body = Problem),
        (status = 401, description = "No valid session", body = Problem),
        (status = 409, description = "Name already registered", body = Problem),
        (status = 422, description = "Name has an invalid format", body = Problem),
        (status = 503, description = "Store unavailable", body = Problem)
    )
)]
pub async fn submit_rsvp(
    Session(session): Session,
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<SubmitRsvpReq>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    debug!(subject = %session.subject_id(), "RSVP submission received");
    let Json(req) = payload.map_err(|rejection| body_rejection_to_problem(&rejection))?;

    let rsvp = svc
        .submit(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, "/rsvp/v1/rsvps"))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionDto {
            outcome: "accepted".to_owned(),
            rsvp: rsvp.into(),
        }),
    ))
}

fn body_rejection_to_problem(rejection: &JsonRejection) -> Problem {
    debug!(error = %rejection, "Rejected RSVP request body");
    Problem::new(rejection.status(), "Invalid Request Body", rejection.body_text())
        .with_code("invalid_body")
        .with_instance("/rsvp/v1/rsvps")
        .with_current_trace()
}

/// List every RSVP, newest first
#[utoipa::path(
    get,
    path = "/rsvp/v1/rsvps",
    tag = "rsvp",
    responses(
        (status = 200, description = "All RSVPs", body = [RsvpDto]),
        (status = 401, description = "No valid session", body = Problem),
        (status = 503, description = "Store unavailable", body = Problem)
    )
)]
pub async fn list_rsvps(
    Session(_): Session,
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<Vec<RsvpDto>>> {
    let rsvps = svc
        .list_all()
        .await
        .map_err(|e| domain_error_to_problem(&e, "/rsvp/v1/rsvps"))?;

    Ok(Json(rsvps.into_iter().map(Into::into).collect()))
}

/// Attendance totals
#[utoipa::path(
    get,
    path = "/rsvp/v1/stats",
    tag = "rsvp",
    responses(
        (status = 200, description = "Attendance totals and records", body = RsvpStatsDto),
        (status = 401, description = "No valid session", body = Problem),
        (status = 503, description = "Store unavailable", body = Problem)
    )
)]
pub async fn get_stats(
    Session(_): Session,
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<RsvpStatsDto>> {
    let stats = svc
        .stats()
        .await
        .map_err(|e| domain_error_to_problem(&e, "/rsvp/v1/stats"))?;

    Ok(Json(stats.into()))
}

/// Live RSVP feed (SSE)
#[utoipa::path(
    get,
    path = "/rsvp/v1/rsvps/events",
    tag = "rsvp",
    responses(
        (status = 200, description = "Stream of RSVP events", content_type = "text/event-stream", body = RsvpEvent),
        (status = 401, description = "No valid session", body = Problem)
    )
)]
pub async fn rsvp_events(
    Session(session): Session,
    Extension(sse): Extension<RsvpBroadcaster>,
) -> impl IntoResponse {
    info!(subject = %session.subject_id(), "New SSE connection for RSVP events");
    sse.sse_response()
}
