mod logging;
mod metrics;

pub use logging::{default_filter, init_tracing};
pub use metrics::Metrics;
