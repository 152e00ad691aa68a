//! `railkeeper-health` - liveness endpoint for railkeeper deployments
//!
//! A minimal sibling service exposing `GET /health`. It exchanges no data
//! with the record store; it exists only so deployment tooling has something
//! to probe.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use axum::{routing::get, Json, Router};
use serde::Serialize;

use railkeeper::logging::Verbosity;
use railkeeper::{init_logging, Config};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn router() -> Router {
    Router::new().route("/health", get(health_check))
}

#[tokio::main]
async fn main() {
    init_logging(Verbosity::Normal);

    let config = Config::load().expect("failed to load configuration");
    let addr = config.health_addr();

    tracing::info!("Starting health service on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind health address");
    axum::serve(listener, router())
        .await
        .expect("health service failed");
}
