mod ledger_entry;
mod liquidity_pool;
mod receipts;
mod user;
mod wallet;

pub use ledger_entry::{LedgerEntry, NewLedgerEntry};
pub use liquidity_pool::LiquidityPoolRecord;
pub use receipts::{AttestationReceipt, BurnReceipt, DebitReceipt, MintReceipt, TokenReceipt};
pub use user::{NewUser, User};
pub use wallet::{NewWallet, Wallet};
