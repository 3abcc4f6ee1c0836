use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use shared_config::AppConfig;
use shared_utils::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic booking API server");

    let config = AppConfig::from_env();
    let bind_address = config.bind_address();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(AppState::in_memory(config));

    let app = router::create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
