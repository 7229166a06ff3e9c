//! The module contains the errors the ledger engine can return.
//!
//! Every error is recoverable: the engine reports it to the caller and the
//! in-memory state is left exactly as it was before the failing operation.
use thiserror::Error;

/// Ledger engine errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("account code \"{0}\" already exists")]
    DuplicateCode(String),
    #[error("account \"{0}\" not found")]
    NotFound(String),
    #[error("account \"{0}\" still has a non-zero balance")]
    NonZeroBalance(String),
    #[error("unknown account \"{0}\"")]
    UnknownAccount(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateCode(a), Self::DuplicateCode(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::NonZeroBalance(a), Self::NonZeroBalance(b)) => a == b,
            (Self::UnknownAccount(a), Self::UnknownAccount(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::CorruptRecord(a), Self::CorruptRecord(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
