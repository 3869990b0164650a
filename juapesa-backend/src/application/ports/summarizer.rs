use crate::domain::DomainError;
use async_trait::async_trait;

/// Port for condensing forecast text into a short summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize non-empty text; empty input is `InvalidInput`
    async fn summarize(&self, text: &str) -> Result<String, DomainError>;
}
