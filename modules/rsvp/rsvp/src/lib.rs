//! RSVP Module
//!
//! Guests submit their full name and whether they will attend; the module
//! validates and de-duplicates the name, stores the record, and serves the
//! list plus attendance totals over REST and a live SSE feed.
//!
//! ## Public API
//!
//! The public API is defined in the `rsvp-sdk` crate and re-exported here:
//! - `RsvpApi` - trait for in-process consumers
//! - `Rsvp`, `NewRsvp`, `RsvpStats`, `SubmissionOutcome` - data models
//! - `RsvpError` - error types

// === PUBLIC API (from SDK) ===
pub use rsvp_sdk::{NewRsvp, Rsvp, RsvpApi, RsvpError, RsvpStats, SubmissionOutcome};

// === MODULE DEFINITION ===
pub mod module;
pub use module::RsvpModule;

// === LOCAL CLIENT ===
pub mod local_client;

// === CONFIG ===
pub mod config;
pub use config::RsvpConfig;

// === INTERNAL MODULES ===
// Exposed for integration tests; consumers should stick to the SDK types.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
