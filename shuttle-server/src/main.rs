use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shuttle_server::ai::AiAvailability;
use shuttle_server::booking::BookingClient;
use shuttle_server::config::AppConfig;
use shuttle_server::service::ShuttleService;
use shuttle_server::session::SessionStore;
use shuttle_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shuttle_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // AI is optional: a missing key only disables suggestions
    let ai = AiAvailability::from_config(&config.ai);

    let booking = BookingClient::new(config.booking.clone())?;
    info!(endpoint = booking.endpoint(), "booking backend configured");

    let sessions = SessionStore::new(&config.session, config.submission_policy);
    let service = ShuttleService::new(sessions, Arc::new(booking), ai)
        .with_search_delay(config.search_delay);

    let app = create_router(AppState::new(service), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        policy = ?config.submission_policy,
        "Himalayan Shuttles listening on http://{}",
        config.bind_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
