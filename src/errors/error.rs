use rust_decimal::Decimal;
use thiserror::Error;

/// Domain errors for the banking core.
///
/// Every failure an operation can report is a variant here; all of them are
/// expected, recoverable outcomes the front end renders back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Payee {payee_id} is not in your payee list")]
    PayeeNotAuthorized { payee_id: String },

    #[error("Cannot add yourself as payee")]
    SelfPayee,

    #[error("Payee already added: {payee_id}")]
    DuplicatePayee { payee_id: String },

    #[error("Account not found: {account_id}")]
    AccountNotFound { account_id: String },

    #[error("Payee account not found: {account_id}")]
    PayeeAccountNotFound { account_id: String },
}

/// Result type alias with BankError
pub type BankResult<T> = Result<T, BankError>;

impl BankError {
    /// Stable machine-readable reason code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            BankError::InvalidAmount { .. } => "invalid_amount",
            BankError::InsufficientBalance { .. } => "insufficient_balance",
            BankError::PayeeNotAuthorized { .. } => "payee_not_authorized",
            BankError::SelfPayee => "self_payee",
            BankError::DuplicatePayee { .. } => "duplicate_payee",
            BankError::AccountNotFound { .. } => "account_not_found",
            BankError::PayeeAccountNotFound { .. } => "payee_account_not_found",
        }
    }
}
