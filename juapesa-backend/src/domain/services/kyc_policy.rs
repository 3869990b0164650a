use crate::domain::DomainError;
use crate::domain::value_objects::KycStatus;

/// Minimum id-number length for level 1 approval
pub const KYC_MIN_ID_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KycDecision {
    pub status: KycStatus,
    pub level: u8,
}

/// Naive KYC rule: approve when the id number is long enough
pub struct KycPolicy;

impl KycPolicy {
    pub fn evaluate(
        phone: &str,
        id_number: &str,
        full_name: &str,
    ) -> Result<KycDecision, DomainError> {
        if phone.is_empty() || id_number.is_empty() || full_name.is_empty() {
            return Err(DomainError::invalid_input("missing required fields"));
        }

        let level = if id_number.chars().count() >= KYC_MIN_ID_LENGTH {
            1
        } else {
            0
        };
        let status = if level >= 1 {
            KycStatus::Approved
        } else {
            KycStatus::Rejected
        };

        Ok(KycDecision { status, level })
    }
}
