//! In-memory virtual banking core: accounts, payee allow-lists and transfers,
//! plus a thin interactive menu front end.
//!
//! State is process-lifetime only and everything runs single-threaded. A
//! caller embedding [`Bank`] in a concurrent context must add its own mutual
//! exclusion (a mutex around the registry) to keep transfers atomic.

pub mod accounts;
pub mod bank;
pub mod errors;
pub mod menu;

pub use accounts::Account;
pub use bank::Bank;
pub use errors::{BankError, BankResult};
pub use menu::run;
