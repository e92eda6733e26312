//! Anonymous identity for the RSVP service.
//!
//! Every browser session signs in anonymously and receives a short-lived,
//! HS256-signed bearer token. The token carries no business meaning; it only
//! satisfies the access policy in front of the RSVP routes.

pub mod axum_ext;
pub mod claims;
pub mod config;
pub mod errors;
pub mod issuer;

pub use axum_ext::{Session, require_session};
pub use claims::SessionClaims;
pub use config::AnonAuthConfig;
pub use errors::AuthError;
pub use issuer::{AnonymousIssuer, IssuedSession};
