//! Axum extractors, middleware and the sign-in route for anonymous sessions

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, Method, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{claims::SessionClaims, errors::AuthError, issuer::AnonymousIssuer};

/// Extractor for the validated session - requires [`require_session`] to run first
#[derive(Debug, Clone)]
pub struct Session(pub SessionClaims);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(Session)
            .ok_or(AuthError::MissingSession)
    }
}

/// Reject requests that do not carry a valid anonymous session token.
///
/// CORS preflight requests pass through untouched. On success the decoded
/// [`SessionClaims`] are placed in the request extensions.
pub async fn require_session(
    State(issuer): State<Arc<AnonymousIssuer>>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_preflight_request(request.method(), request.headers()) {
        return next.run(request).await;
    }

    let Some(token) = extract_bearer_token(request.headers()) else {
        return AuthError::MissingToken.into_response();
    };

    match issuer.validate(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Response body of `POST /auth/v1/anonymous`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub token: String,
    pub token_type: String,
    pub subject_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

/// Sign in anonymously
#[utoipa::path(
    post,
    path = "/auth/v1/anonymous",
    tag = "auth",
    responses(
        (status = 201, description = "Anonymous session established", body = SessionDto),
        (status = 500, description = "Token could not be issued", body = problem_details::Problem)
    )
)]
pub async fn sign_in_anonymously(
    Extension(issuer): Extension<Arc<AnonymousIssuer>>,
) -> Result<(StatusCode, Json<SessionDto>), AuthError> {
    let session = issuer.sign_in_anonymously()?;
    tracing::info!(subject = %session.subject_id, "Anonymous sign-in");

    Ok((
        StatusCode::CREATED,
        Json(SessionDto {
            token: session.token,
            token_type: "Bearer".to_owned(),
            subject_id: session.subject_id,
            expires_at: session.expires_at,
        }),
    ))
}

/// Mount the public sign-in route.
pub fn register_routes(router: Router, issuer: Arc<AnonymousIssuer>) -> Router {
    router.route(
        "/auth/v1/anonymous",
        post(sign_in_anonymously).layer(Extension(issuer)),
    )
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn is_preflight_request(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(axum::http::header::ORIGIN)
        && headers.contains_key(axum::http::header::ACCESS_CONTROL_REQUEST_METHOD)
}
