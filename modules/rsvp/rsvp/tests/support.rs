#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Support module provides utilities that may not all be used

//! Test support utilities for `rsvp` integration tests.

use std::sync::Arc;
use std::time::Duration;

use anon_auth::AnonymousIssuer;
use rsvp::RsvpConfig;
use rsvp::infra::storage::entity;
use rsvp_sdk::Rsvp;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use time::OffsetDateTime;
use uuid::Uuid;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// The pool holds exactly one connection so every query sees the same
/// in-memory database.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    rsvp::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Seed a record directly, bypassing the workflow.
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_rsvp(
    db: &DatabaseConnection,
    display_name: &str,
    attending: bool,
    created_at: OffsetDateTime,
) -> Rsvp {
    let am = entity::ActiveModel {
        id: Set(Uuid::now_v7()),
        display_name: Set(display_name.to_owned()),
        normalized_name: Set(display_name.to_lowercase()),
        attending: Set(attending),
        created_at: Set(created_at),
    };

    am.insert(db).await.expect("Failed to seed rsvp").into()
}

pub fn test_config() -> RsvpConfig {
    RsvpConfig::default()
}

pub fn test_issuer() -> Arc<AnonymousIssuer> {
    Arc::new(AnonymousIssuer::new(
        b"integration-test-secret-0123456789",
        Duration::from_secs(300),
        "rsvp-tests",
    ))
}
