use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures raised by the in-memory ledger.
///
/// Every variant is produced at the point of detection and travels unchanged through
/// [`crate::domain::Customer`] and [`crate::core::services::BankingService`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankError {
    #[error("Invalid amount: {amount}. Amount must be greater than zero.")]
    InvalidAmount { amount: f64 },
    #[error("Insufficient balance: requested {requested}, available {available}.")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

pub type Result<T> = StdResult<T, BankError>;

/// User-facing console error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BankError),
    #[error("Invalid amount input: {0}")]
    Input(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl CliError {
    /// Returns true when the error only aborts the current request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::Core(_) | CliError::Input(_))
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Prompt(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}
