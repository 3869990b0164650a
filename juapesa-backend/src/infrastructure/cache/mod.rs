mod in_memory;

pub use in_memory::InMemoryCache;

use crate::application::ports::Cache;
use std::sync::Arc;

/// Pick the cache backend for a connection string.
///
/// Only the in-process backend exists, so an external URL is logged and
/// ignored.
pub fn cache_from_url(url: Option<&str>) -> Arc<dyn Cache> {
    if let Some(url) = url {
        tracing::warn!(
            url = %url,
            "External cache store not available, using in-process cache"
        );
    }
    Arc::new(InMemoryCache::new())
}
