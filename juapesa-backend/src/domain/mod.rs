pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::DomainError;

// Re-export entity types
pub use entities::{
    AttestationReceipt, BurnReceipt, DebitReceipt, LedgerEntry, LiquidityPoolRecord, MintReceipt,
    NewLedgerEntry, NewUser, NewWallet, TokenReceipt, User, Wallet,
};

// Re-export services
pub use services::{Clock, ForecastEngine, IdGenerator, KycDecision, KycPolicy};

// Re-export value objects
pub use value_objects::{ConversionMode, ForecastWindow, KycStatus, Timestamp};
