//! Deterministic net-flow forecasting
//!
//! Stands in for a real demand model. The output is a pure function of
//! `(operator, window)`: SHA-256 over `"{operator}-{window}"`, read as a
//! big-endian unsigned integer, reduced modulo [`FORECAST_BUCKETS`] and
//! mapped onto `[-1000.00, 999.99]`.

use crate::domain::DomainError;
use crate::domain::value_objects::ForecastWindow;
use sha2::{Digest, Sha256};

/// Number of distinct forecast values
pub const FORECAST_BUCKETS: u64 = 200_000;
/// Divisor applied to the bucket index
pub const FORECAST_SCALE: f64 = 100.0;
/// Shift that centres the range on zero
pub const FORECAST_OFFSET: f64 = 1000.0;

pub struct ForecastEngine;

impl ForecastEngine {
    /// Predict the net flow for an operator over a window
    pub fn predict(operator: &str, window: ForecastWindow) -> Result<f64, DomainError> {
        if operator.is_empty() {
            return Err(DomainError::invalid_input("operator required"));
        }

        let digest = Sha256::digest(format!("{}-{}", operator, window.as_str()).as_bytes());
        let bucket = Self::reduce(&digest);

        Ok(bucket as f64 / FORECAST_SCALE - FORECAST_OFFSET)
    }

    /// Same as [`predict`](Self::predict) for a window that has not been parsed yet.
    ///
    /// The operator is checked before the window.
    pub fn predict_raw(operator: &str, window: &str) -> Result<f64, DomainError> {
        if operator.is_empty() {
            return Err(DomainError::invalid_input("operator required"));
        }
        let window = ForecastWindow::try_from(window)?;
        Self::predict(operator, window)
    }

    /// Sentence fed to the summarizer for an operator forecast
    pub fn describe(operator: &str, window: ForecastWindow, predicted: f64) -> String {
        format!(
            "Operator {} predicted net flow {:.2} over {}.",
            operator, predicted, window
        )
    }

    /// Big-endian digest modulo FORECAST_BUCKETS, one byte at a time.
    /// Equivalent to reducing the full 256-bit integer.
    fn reduce(digest: &[u8]) -> u64 {
        digest.iter().fold(0u64, |acc, byte| {
            (acc * 256 + u64::from(*byte)) % FORECAST_BUCKETS
        })
    }
}
