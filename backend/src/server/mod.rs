//! Server construction and store selection.

mod config;

pub use config::TrackerSettings;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::{info, warn};

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::JobApplicationService;
use backend::inbound::http::build_app;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryApplicationStore;
use backend::outbound::persistence::{DbPool, DieselApplicationStore, PoolConfig, run_migrations};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build handler state over PostgreSQL when a database URL is configured,
/// otherwise over an in-memory store.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub async fn build_http_state(settings: &TrackerSettings) -> std::io::Result<HttpState> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; records are kept in memory only");
        let store = Arc::new(InMemoryApplicationStore::new());
        return Ok(HttpState::from_service(Arc::new(JobApplicationService::new(
            store,
        ))));
    };

    let migration_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(
        PoolConfig::new(database_url)
            .with_max_size(settings.db_max_connections())
            .with_connection_timeout(settings.db_connect_timeout()),
    )
    .await
    .map_err(std::io::Error::other)?;
    info!("using PostgreSQL application store");
    let store = Arc::new(DieselApplicationStore::new(pool));
    Ok(HttpState::from_service(Arc::new(JobApplicationService::new(
        store,
    ))))
}

/// Construct the HTTP server bound to the configured address.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(state: HttpState, settings: &TrackerSettings) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let bind_addr = (settings.host().to_owned(), settings.port());
    let server = HttpServer::new(move || {
        let app = build_app(state.clone());

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr.clone())?
    .run();

    info!(host = %bind_addr.0, port = bind_addr.1, "job application tracker listening");
    Ok(server)
}
