pub mod ai;
pub mod cache;
pub mod clock;
pub mod config;
pub mod integrations;
pub mod observability;
pub mod persistence;

pub use ai::{CredentialSource, GroqSummarizer};
pub use cache::{InMemoryCache, cache_from_url};
pub use clock::{FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError, Info, IntegrationsConfig};
pub use integrations::IntegrationRegistry;
pub use observability::{Metrics, init_tracing};
pub use persistence::{Database, PersistenceError};
