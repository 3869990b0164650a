mod groq;

pub use groq::{CredentialSource, GroqSummarizer, SUMMARY_PREFIX_CHARS};
