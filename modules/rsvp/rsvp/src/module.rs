use std::sync::Arc;

use anon_auth::AnonymousIssuer;
use anyhow::Context;
use rsvp_sdk::RsvpApi;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::openapi::RsvpApiDoc;
use crate::api::rest::routes;
use crate::api::rest::sse::{RsvpBroadcaster, SseRsvpEventPublisher};
use crate::config::RsvpConfig;
use crate::domain::events::RsvpDomainEvent;
use crate::domain::ports::EventPublisher;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::SeaOrmRsvpRepository;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::RsvpLocalClient;

/// Composition root of the rsvp module: one service, one live feed, shared
/// by the REST routes and the local client.
#[derive(Clone)]
pub struct RsvpModule {
    service: Arc<Service>,
    sse: RsvpBroadcaster,
}

impl RsvpModule {
    /// Run migrations, then wire the module over `db`.
    ///
    /// # Errors
    /// Returns an error if the config is out of range or the migrations fail.
    pub async fn init(db: DatabaseConnection, cfg: &RsvpConfig) -> anyhow::Result<Self> {
        info!("Initializing rsvp module");
        cfg.validate()?;
        Self::migrate(&db).await?;
        Ok(Self::new(db, cfg))
    }

    /// # Errors
    /// Returns an error if a migration fails.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running rsvp database migrations");
        Migrator::up(db, None)
            .await
            .context("rsvp migrations failed")?;
        info!("RSVP database migrations completed successfully");
        Ok(())
    }

    #[must_use]
    pub fn new(db: DatabaseConnection, cfg: &RsvpConfig) -> Self {
        let sse = RsvpBroadcaster::new(cfg.events_capacity);
        let publisher: Arc<dyn EventPublisher<RsvpDomainEvent>> =
            Arc::new(SseRsvpEventPublisher::new(sse.clone()));

        let service = Arc::new(Service::new(
            Arc::new(SeaOrmRsvpRepository::new(db)),
            publisher,
            ServiceConfig {
                max_name_length: cfg.max_name_length,
            },
        ));

        Self { service, sse }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    #[must_use]
    pub fn broadcaster(&self) -> RsvpBroadcaster {
        self.sse.clone()
    }

    /// Transport-agnostic client for in-process consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn RsvpApi> {
        Arc::new(RsvpLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router, issuer: Arc<AnonymousIssuer>) -> axum::Router {
        info!("Registering rsvp REST routes");
        routes::register_routes(router, self.service.clone(), self.sse.clone(), issuer)
    }

    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        <RsvpApiDoc as utoipa::OpenApi>::openapi()
    }
}
