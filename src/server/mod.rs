pub mod handlers;
pub mod types;

use crate::{config::Config, reviewer::OpenAiReviewer, Result};
use axum::{routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/ai/get-review", post(handlers::get_review))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let reviewer = OpenAiReviewer::new(config.llm.clone());

    let app_state = handlers::AppState {
        reviewer: Arc::new(reviewer),
    };

    let app = router(app_state);

    // PORT overrides the configured port, matching the deployment glue
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config.server.port);

    let addr = SocketAddr::new(config.server.host.parse()?, port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
