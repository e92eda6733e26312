use std::future::{Future, IntoFuture};
use std::sync::Arc;

use anon_auth::AnonymousIssuer;
use anon_auth::axum_ext::{self, SessionDto};
use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router};
use rsvp::RsvpModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::{AppConfig, DatabaseConfig};
use crate::signals;

#[derive(OpenApi)]
#[openapi(
    info(title = "Baby shower RSVP API"),
    paths(axum_ext::sign_in_anonymously),
    components(schemas(SessionDto)),
    tags((name = "auth", description = "Anonymous sessions"))
)]
struct AuthApiDoc;

/// Combined document for every mounted route.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = AuthApiDoc::openapi();
    doc.merge(RsvpModule::openapi());
    doc
}

/// # Errors
/// Returns an error if the timeout does not parse or the database is
/// unreachable.
pub async fn connect_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let connect_timeout = humantime::parse_duration(&cfg.connect_timeout)
        .with_context(|| format!("invalid connect_timeout '{}'", cfg.connect_timeout))?;

    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .connect_timeout(connect_timeout)
        .sqlx_logging(false);

    // Every pooled connection to `:memory:` would open its own empty database.
    if cfg.is_in_memory() {
        opts.max_connections(1).min_connections(1);
    }

    Database::connect(opts)
        .await
        .context("failed to connect to database")
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

async fn health() -> &'static str {
    "ok"
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}

/// Assemble the HTTP surface: health and docs, the public sign-in route, and
/// the session-protected RSVP routes.
///
/// # Errors
/// Returns an error if a configured CORS origin is not a valid header value.
pub fn build_router(
    module: &RsvpModule,
    issuer: Arc<AnonymousIssuer>,
    cors_origins: &[String],
) -> Result<Router> {
    let router = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));
    let router = axum_ext::register_routes(router, issuer.clone());
    let router = module.register_rest(router, issuer);

    Ok(router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins)?))
}

/// Cancel `token` once `signal` resolves. A listener that fails to install
/// leaves the token alone so the server keeps running.
async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = Result<()>>,
{
    match signal.await {
        Ok(()) => token.cancel(),
        Err(e) => tracing::error!(
            error = %e,
            "Signal handling failed; continuing without signal-driven shutdown"
        ),
    }
}

/// Start serving and block until a shutdown signal has been handled.
///
/// # Errors
/// Returns an error if any startup step fails or the listener dies.
pub async fn run(config: AppConfig) -> Result<()> {
    let shutdown_timeout = humantime::parse_duration(&config.server.shutdown_timeout)
        .with_context(|| {
            format!(
                "invalid shutdown_timeout '{}'",
                config.server.shutdown_timeout
            )
        })?;

    let db = connect_db(&config.database).await?;
    let module = RsvpModule::init(db.clone(), &config.rsvp).await?;
    let issuer = Arc::new(AnonymousIssuer::from_config(&config.auth)?);
    let app = build_router(&module, issuer, &config.server.cors_origins)?;

    let addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(cancel_on_signal(signals::wait_for_shutdown(), trigger));

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(cancel.clone().cancelled_owned())
        .into_future();

    // Live feeds never end on their own; cap how long they may hold shutdown.
    tokio::select! {
        res = server => res.context("server error")?,
        () = async {
            cancel.cancelled().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => tracing::warn!("Graceful shutdown timed out; dropping open connections"),
    }

    db.close().await.context("failed to close database")?;
    tracing::info!("Server stopped");
    Ok(())
}
