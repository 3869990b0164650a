//! Jua Pesa backend
//!
//! HTTP backend for a mobile-money and cross-border transfer product:
//! USSD stepping, conversion and rebalance orders, KYC, mobile-money debits
//! and a deterministic per-operator net-flow forecast with a text summary.
//!
//! # Architecture
//!
//! - **Domain**: value objects, entities and pure services (forecast engine, KYC policy, ids)
//! - **Application**: use cases and the ports they depend on
//! - **Infrastructure**: config, clocks, cache, SQLite store, integration clients, metrics
//! - **Presentation**: axum router, DTOs and error translation
//!
//! Integration clients are stubs by default. The `live-integrations` feature
//! compiles live placeholders that the registry selects when a stub flag is off.
//!
//! # Example
//!
//! ```ignore
//! use juapesa_backend::{AppConfig, Backend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = Backend::new(AppConfig::default()).await?;
//!     backend.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::{
    Clock, ConversionMode, DomainError, ForecastEngine, ForecastWindow, IdGenerator, KycStatus,
    Timestamp,
};

pub use infrastructure::{
    AppConfig, CredentialSource, Database, FixedClock, GroqSummarizer, InMemoryCache,
    IntegrationRegistry, Metrics, SystemClock,
};

pub use application::ports::{Cache, Summarizer};

pub use presentation::{ApiError, AppState, create_router};

use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The backend server and everything its handlers share
pub struct Backend<C: Clock + 'static> {
    pub config: Arc<AppConfig>,
    pub clock: Arc<C>,
    pub summarizer: Arc<dyn Summarizer>,
    pub integrations: IntegrationRegistry,
    pub cache: Arc<dyn Cache>,
    pub database: Database,
    pub metrics: Metrics,
}

impl<C: Clock + 'static> Backend<C> {
    /// Wire every adapter from configuration with the given clock
    pub async fn with_clock(config: AppConfig, clock: Arc<C>) -> anyhow::Result<Self> {
        let summarizer: Arc<dyn Summarizer> = Arc::new(GroqSummarizer::from_config(
            CredentialSource::Unspecified,
            &config,
        ));
        let integrations = IntegrationRegistry::from_config(&config.integrations);
        let cache = infrastructure::cache_from_url(config.redis_url.as_deref());
        let database = Database::connect_and_init(&config.database_url)
            .await
            .context("Failed to configure database")?;
        let metrics = Metrics::new().context("Failed to register metrics")?;

        Ok(Backend {
            config: Arc::new(config),
            clock,
            summarizer,
            integrations,
            cache,
            database,
            metrics,
        })
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.clock),
            Arc::clone(&self.summarizer),
            self.integrations.clone(),
            Arc::clone(&self.cache),
            self.database.clone(),
            self.metrics.clone(),
        ));

        create_router(state)
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.bind_address();
        let info = self.config.info();
        let router = self.rest_router();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!(
            name = info.name,
            version = info.version,
            env = %info.env,
            "Listening on {}",
            addr
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Shut down");
        Ok(())
    }
}

impl Backend<SystemClock> {
    /// Create a backend on the wall clock
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock::new())).await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
