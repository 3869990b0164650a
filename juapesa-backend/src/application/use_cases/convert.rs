use super::ensure_positive;
use crate::domain::{Clock, ConversionMode, DomainError, IdGenerator};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Convert value arriving on a payment rail into a token
#[derive(Debug, Clone)]
pub struct ConvertCommand {
    pub user_id: String,
    /// Rail the value originates from (e.g. "m-pesa")
    pub from_rail: String,
    pub from_operator: Option<String>,
    pub amount: Decimal,
    pub to_token: String,
    pub to_chain: Option<String>,
    pub mode: ConversionMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertResult {
    pub tx_id: String,
    pub status: &'static str,
    pub estimated_completion: &'static str,
    pub fees: f64,
}

pub struct ConvertUseCase<C: Clock> {
    ids: IdGenerator<C>,
}

impl<C: Clock> ConvertUseCase<C> {
    pub const STATUS_SUBMITTED: &'static str = "submitted";
    pub const ESTIMATED_COMPLETION: &'static str = "~15s";
    pub const FLAT_FEE: f64 = 0.05;

    pub fn new(clock: Arc<C>) -> Self {
        Self {
            ids: IdGenerator::new(clock),
        }
    }

    pub fn execute(&self, command: ConvertCommand) -> Result<ConvertResult, DomainError> {
        ensure_positive(command.amount)?;

        let tx_id = self.ids.new_transaction_id("cv");

        tracing::info!(
            tx_id = %tx_id,
            user_id = %command.user_id,
            rail = %command.from_rail,
            token = %command.to_token,
            mode = %command.mode,
            amount = %command.amount,
            "Conversion submitted"
        );

        Ok(ConvertResult {
            tx_id,
            status: Self::STATUS_SUBMITTED,
            estimated_completion: Self::ESTIMATED_COMPLETION,
            fees: Self::FLAT_FEE,
        })
    }
}
