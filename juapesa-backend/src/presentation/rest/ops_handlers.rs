//! Liveness, readiness, metrics and smoke-check endpoints

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::domain::Clock;
use crate::infrastructure::config::SERVICE_VERSION;
use crate::presentation::rest::dto::{HealthResponse, ReadyResponse, TestAllResponse};

use super::AppState;

const TESTALL_SERVICES: [&str; 5] = ["api", "models", "utils", "ai", "services"];
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /healthz
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /readyz
pub async fn readyz<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
) -> (StatusCode, Json<ReadyResponse>) {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                ready: true,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    ready: false,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// GET /metrics
pub async fn metrics<C: Clock>(State(state): State<Arc<AppState<C>>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}

/// GET /testall
pub async fn testall() -> Json<TestAllResponse> {
    Json(TestAllResponse {
        ok: true,
        services: TESTALL_SERVICES.to_vec(),
        version: SERVICE_VERSION,
    })
}
