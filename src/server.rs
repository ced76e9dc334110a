//! HTTP status surface.
//!
//! Two GET endpoints returning JSON status/timestamp payloads, used by
//! uptime probes and load balancers. This surface is independent of the
//! database wrapper; it only reports that the process is serving.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

/// Payload for the root status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusPayload {
    message: &'static str,
    timestamp: String,
    status: &'static str,
}

/// Payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthPayload {
    status: &'static str,
    timestamp: String,
}

/// Builds the router for the status API.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Root status handler.
async fn root() -> Json<StatusPayload> {
    Json(status_payload())
}

/// Health check handler: a liveness probe, 200 whenever the process can
/// respond to HTTP.
async fn health() -> Json<HealthPayload> {
    Json(health_payload())
}

fn status_payload() -> StatusPayload {
    StatusPayload {
        message: "Project Updates API",
        timestamp: Utc::now().to_rfc3339(),
        status: "running",
    }
}

fn health_payload() -> HealthPayload {
    HealthPayload {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    }
}
