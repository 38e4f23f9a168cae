//! The module contains the errors the ledger can throw.
//!
//! The taxonomy is deliberately small:
//!
//! - [`ParseError`] for free-text entries that are not valid expenses.
//! - [`StoreError`] for failures talking to the remote ledger store,
//!   collapsing transport, auth and quota problems into one class.
//! - [`LedgerError`] wrapping both, plus the read-back failures a query
//!   can hit on its own.
//!
//! Errors are converted to user-facing text only at the chat boundary.
use thiserror::Error;

/// Errors produced while parsing a free-text expense entry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `amount, item` or `amount, item, place`")]
    InvalidFormat,
    #[error("the first value must be a number")]
    InvalidAmount,
}

/// Failures of the remote ledger store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{status}: {message}")]
    Service { status: u16, message: String },
}

/// Result errors for recorder and query operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed ledger row: {0}")]
    MalformedRow(String),
    #[error("the ledger total overflows the supported range")]
    Overflow,
}
