mod config;

use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use config::{AppConfig, StorageBackend};
use events_dao::{EventDao, EventStore, InMemoryEventStore};
use events_models::{Clock, SystemClock};
use sql_connection::{SqlConnect, connect_postgres_db};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn EventStore> = match config.storage {
        StorageBackend::Postgres => {
            info!("Initializing PostgreSQL connection pool...");
            connect_postgres_db(&config.database).await?;
            let db = SqlConnect::from_global().ok_or_else(|| {
                anyhow::anyhow!("SQL database pool not established")
            })?;
            info!("PostgreSQL connection pool initialized");
            Arc::new(EventDao::new(db))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory event store; data is lost on shutdown");
            Arc::new(InMemoryEventStore::new())
        }
    };

    let app = build_router(store, Arc::new(SystemClock));

    let addr = config.socket_addr()?;
    info!("Event manager starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(
    store: Arc<dyn EventStore>, clock: Arc<dyn Clock>,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/events", events_http::event_routes(store, clock))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        events_http::list_events,
        events_http::get_event,
        events_http::create_event,
        events_http::update_event,
        events_http::delete_event,
        events_http::events_by_category,
        events_http::events_by_date_range,
        events_http::events_by_organizer,
        events_http::search_by_name,
        events_http::global_search,
        events_http::upcoming_events,
        events_http::upcoming_by_category,
        events_http::list_categories
    ),
    components(
        schemas(
            events_models::EventRecord,
            events_models::EventCategory,
            events_responses::EventResponse,
            events_responses::CategoryResponse,
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
            common_errors::ApiFieldError,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event catalog endpoints")
    ),
    info(
        title = "Event Manager API",
        description = "Catalog of scheduled events with search and filters",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check successful with connection pool status", body = String)
    ),
    tag = "health"
)]
async fn health_check() -> impl IntoResponse {
    let health_info = match SqlConnect::from_global() {
        Some(db) => {
            let (available, size) = db.get_pool_status();
            format!("OK - Pool: {available}/{size} available")
        }
        None => "OK - In-memory store".to_string(),
    };

    (StatusCode::OK, health_info)
}
