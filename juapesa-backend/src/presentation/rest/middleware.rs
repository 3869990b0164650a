//! Per-request context: request id, latency, counters and one log line

use axum::{
    extract::{MatchedPath, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use super::AppState;
use crate::domain::Clock;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Label used for requests that matched no route
const UNMATCHED_PATH: &str = "unmatched";

pub async fn request_context<C: Clock + 'static>(
    State(state): State<Arc<AppState<C>>>,
    req: Request,
    next: Next,
) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());

    state.metrics.http_requests_in_flight.inc();
    let started = Instant::now();

    // Events emitted while handling, error logs included, carry the request id
    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(req).instrument(span).await;

    let elapsed = started.elapsed();
    state.metrics.http_requests_in_flight.dec();

    let status = response.status().as_u16();
    state
        .metrics
        .observe_request(&method, &path, status, elapsed.as_secs_f64());

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status,
        latency_ms = elapsed.as_millis() as u64,
        "request"
    );

    response
}
