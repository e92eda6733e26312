//! RSVP SDK
//!
//! Transport-agnostic contract of the `rsvp` module: the [`RsvpApi`] trait,
//! the public models, and [`RsvpError`].

pub mod api;
pub mod errors;
pub mod models;

pub use api::RsvpApi;
pub use errors::RsvpError;
pub use models::{NewRsvp, Rsvp, RsvpStats, SubmissionOutcome};
