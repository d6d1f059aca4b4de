use axum::{
    http::Method,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod database;
mod error;
mod handlers;
mod service;
mod store;

pub use error::{ApiResult, AppError};

#[cfg(test)]
mod tests;

pub struct AppState {
    pub service: service::ContactService,
}

/// Build the application router. Split out of `main` so tests can drive the
/// full HTTP surface against an in-memory store.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Rolodex Contact Manager API v0.1.0" }))
        .route("/health", get(handlers::health_check))
        .nest("/api/contacts", handlers::contact_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    let db_pool = database::create_pool(&config.database_url).await?;

    database::migrate(&db_pool).await?;

    let store = Arc::new(store::PgContactStore::new(db_pool));
    let app_state = Arc::new(AppState {
        service: service::ContactService::new(store),
    });

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Contact Manager API listening on {}", config.server_addr);
    tracing::info!("API base URL: http://{}/api", config.server_addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
