use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("session token expired")]
    Expired,

    #[error("invalid session token: {0}")]
    InvalidToken(String),

    #[error("failed to sign session token: {0}")]
    Signing(String),

    #[error("invalid auth configuration: {0}")]
    Config(String),

    #[error("session not found - require_session middleware not configured")]
    MissingSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::Expired | Self::InvalidToken(_) => {
                tracing::debug!(error = %self, "Rejecting unauthenticated request");
                let mut resp = problem_details::unauthorized(self.to_string())
                    .with_current_trace()
                    .into_response();
                resp.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer"),
                );
                resp
            }
            Self::Signing(_) | Self::Config(_) | Self::MissingSession => {
                tracing::error!(error = %self, "Auth internal error");
                problem_details::internal_error("An internal authentication error occurred")
                    .with_code("auth_internal")
                    .with_current_trace()
                    .into_response()
            }
        }
    }
}
