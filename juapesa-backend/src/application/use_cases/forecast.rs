//! Forecast and operator summary use cases

use crate::application::ports::Summarizer;
use crate::domain::{DomainError, ForecastEngine, ForecastWindow};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ForecastQuery {
    pub operator: String,
    pub window: ForecastWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub operator: String,
    pub window: ForecastWindow,
    pub predicted_net_flow: f64,
}

pub struct ForecastUseCase<S: Summarizer + ?Sized> {
    summarizer: Arc<S>,
}

impl<S: Summarizer + ?Sized> ForecastUseCase<S> {
    pub fn new(summarizer: Arc<S>) -> Self {
        Self { summarizer }
    }

    pub fn predict(&self, query: ForecastQuery) -> Result<ForecastResult, DomainError> {
        let predicted_net_flow = ForecastEngine::predict(&query.operator, query.window)?;

        tracing::debug!(
            operator = %query.operator,
            window = %query.window,
            predicted_net_flow,
            "Forecast computed"
        );

        Ok(ForecastResult {
            operator: query.operator,
            window: query.window,
            predicted_net_flow,
        })
    }

    /// Summarize the forecast for an operator. The window is validated here
    /// because it arrives as a free-form query string.
    pub async fn operator_summary(
        &self,
        operator: &str,
        window: &str,
    ) -> Result<String, DomainError> {
        let predicted = ForecastEngine::predict_raw(operator, window)?;
        let window = ForecastWindow::try_from(window)?;
        let text = ForecastEngine::describe(operator, window, predicted);

        self.summarizer.summarize(&text).await
    }
}
