use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::request_context, ops_handlers};
use crate::application::ports::{Cache, Summarizer};
use crate::domain::Clock;
use crate::infrastructure::{AppConfig, Database, IntegrationRegistry, Metrics};

/// Application state shared across handlers
pub struct AppState<C: Clock> {
    pub config: Arc<AppConfig>,
    pub clock: Arc<C>,
    pub summarizer: Arc<dyn Summarizer>,
    pub integrations: IntegrationRegistry,
    pub cache: Arc<dyn Cache>,
    pub database: Database,
    pub metrics: Metrics,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        config: Arc<AppConfig>,
        clock: Arc<C>,
        summarizer: Arc<dyn Summarizer>,
        integrations: IntegrationRegistry,
        cache: Arc<dyn Cache>,
        database: Database,
        metrics: Metrics,
    ) -> Self {
        AppState {
            config,
            clock,
            summarizer,
            integrations,
            cache,
            database,
            metrics,
        }
    }
}

/// `*` allows any origin; otherwise only the listed ones. An empty list allows none.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION];

    let cors = if config.allows_any_origin() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    cors.allow_methods(methods).allow_headers(headers)
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Payments
        .route("/api/ussd/session", post(handlers::ussd_session::<C>))
        .route("/api/convert", post(handlers::convert::<C>))
        .route("/api/liquidity/rebalance", post(handlers::rebalance::<C>))
        .route("/api/kyc/verify", post(handlers::kyc_verify))
        .route("/api/daraja/debit", post(handlers::daraja_debit::<C>))
        // Forecasting
        .route("/api/forecast", post(handlers::forecast::<C>))
        .route(
            "/api/operators/{operator}/summary",
            get(handlers::operator_summary::<C>),
        )
        // Operational
        .route("/healthz", get(ops_handlers::healthz))
        .route("/readyz", get(ops_handlers::readyz::<C>))
        .route("/metrics", get(ops_handlers::metrics::<C>))
        .route("/testall", get(ops_handlers::testall))
        // Middleware; request_context must stay outermost so CORS preflights pass through it
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            request_context::<C>,
        ))
        .with_state(state)
}
