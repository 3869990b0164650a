use crate::domain::{DomainError, KycDecision, KycPolicy};

#[derive(Debug, Clone)]
pub struct KycCommand {
    pub phone: String,
    pub id_number: String,
    pub full_name: String,
}

pub struct KycUseCase;

impl KycUseCase {
    pub fn execute(command: &KycCommand) -> Result<KycDecision, DomainError> {
        let decision = KycPolicy::evaluate(&command.phone, &command.id_number, &command.full_name)?;

        tracing::info!(
            phone = %command.phone,
            status = %decision.status,
            level = decision.level,
            "KYC evaluated"
        );

        Ok(decision)
    }
}
