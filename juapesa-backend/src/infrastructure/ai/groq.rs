//! Summarizer backed by the Groq text-generation API
//!
//! No network call is made. Without a credential the output is a
//! deterministic `[mock-summary:N]` placeholder; with one it is tagged
//! `[would-call-groq]`. Both carry the first 32 characters of the input.

use crate::application::ports::Summarizer;
use crate::domain::DomainError;
use crate::infrastructure::config::AppConfig;
use async_trait::async_trait;
use std::fmt;

/// Characters of input kept in a summary
pub const SUMMARY_PREFIX_CHARS: usize = 32;

const MOCK_TAG: &str = "mock-summary";
const LIVE_TAG: &str = "[would-call-groq]";

/// Where the summarizer credential comes from
///
/// `Unspecified` defers to configuration. `Explicit(None)` forces the
/// offline path even when configuration carries a key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialSource {
    #[default]
    Unspecified,
    Explicit(Option<String>),
}

impl CredentialSource {
    /// Settle on a key, falling back to `configured` only when unspecified.
    /// Empty keys count as absent.
    pub fn resolve(self, configured: Option<&str>) -> Option<String> {
        let key = match self {
            CredentialSource::Unspecified => configured.map(str::to_string),
            CredentialSource::Explicit(key) => key,
        };
        key.filter(|k| !k.is_empty())
    }
}

pub struct GroqSummarizer {
    api_key: Option<String>,
}

impl GroqSummarizer {
    pub fn new(source: CredentialSource, configured: Option<&str>) -> Self {
        Self {
            api_key: source.resolve(configured),
        }
    }

    pub fn from_config(source: CredentialSource, config: &AppConfig) -> Self {
        Self::new(source, config.groq_api_key.as_deref())
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for GroqSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqSummarizer")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl Summarizer for GroqSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, DomainError> {
        if text.is_empty() {
            return Err(DomainError::invalid_input("text must be non-empty"));
        }

        let prefix: String = text.chars().take(SUMMARY_PREFIX_CHARS).collect();

        if self.api_key.is_none() {
            let kept = prefix.chars().count();
            return Ok(format!("[{}:{}]{}", MOCK_TAG, kept, prefix));
        }

        // Credentialed path is tagged only; no request leaves the process
        Ok(format!("{}{}", LIVE_TAG, prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_without_key() {
        let summarizer = GroqSummarizer::new(CredentialSource::Explicit(None), None);
        let out = summarizer
            .summarize("Hello world, this is a test of Groq client")
            .await
            .unwrap();

        assert!(out.starts_with("[mock-summary:"));
        assert_eq!(out, "[mock-summary:32]Hello world, this is a test of G");
    }

    #[tokio::test]
    async fn test_short_text_kept_whole() {
        let summarizer = GroqSummarizer::new(CredentialSource::Explicit(None), None);
        assert_eq!(summarizer.summarize("hi").await.unwrap(), "[mock-summary:2]hi");
    }

    #[tokio::test]
    async fn test_prefix_counts_characters() {
        let summarizer = GroqSummarizer::new(CredentialSource::Explicit(None), None);
        let text = "é".repeat(40);
        let out = summarizer.summarize(&text).await.unwrap();
        assert_eq!(out, format!("[mock-summary:32]{}", "é".repeat(32)));
    }

    #[tokio::test]
    async fn test_with_key_branch() {
        let summarizer =
            GroqSummarizer::new(CredentialSource::Explicit(Some("dummy".to_string())), None);
        let out = summarizer.summarize("Hello again").await.unwrap();
        assert_eq!(out, "[would-call-groq]Hello again");
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let summarizer = GroqSummarizer::new(CredentialSource::Explicit(None), None);
        let err = summarizer.summarize("").await.unwrap_err();
        assert_eq!(err, DomainError::invalid_input("text must be non-empty"));
    }

    #[test]
    fn test_credential_resolution() {
        assert!(GroqSummarizer::new(CredentialSource::Unspecified, Some("cfg")).has_credential());
        assert!(!GroqSummarizer::new(CredentialSource::Unspecified, None).has_credential());
        // Explicit none wins over configuration
        assert!(!GroqSummarizer::new(CredentialSource::Explicit(None), Some("cfg")).has_credential());
        assert!(
            !GroqSummarizer::new(CredentialSource::Explicit(Some(String::new())), None)
                .has_credential()
        );
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig {
            groq_api_key: Some("gsk-test".to_string()),
            ..AppConfig::default()
        };
        assert!(GroqSummarizer::from_config(CredentialSource::Unspecified, &config).has_credential());
    }

    #[test]
    fn test_explicit_none_ignores_configured_key() {
        let config = AppConfig {
            groq_api_key: Some("gsk-test".to_string()),
            ..AppConfig::default()
        };
        let summarizer =
            GroqSummarizer::from_config(CredentialSource::Explicit(None), &config);

        let out = tokio_test::block_on(summarizer.summarize("Operator mtn")).unwrap();
        assert_eq!(out, "[mock-summary:12]Operator mtn");
    }

    #[test]
    fn test_debug_redacts_key() {
        let summarizer =
            GroqSummarizer::new(CredentialSource::Explicit(Some("secret".to_string())), None);
        let rendered = format!("{:?}", summarizer);
        assert!(!rendered.contains("secret"));
    }
}
