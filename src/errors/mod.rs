pub mod error;

pub use error::{BankError, BankResult};
