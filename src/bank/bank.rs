use std::collections::HashMap;

use log::info;
use rand::Rng;
use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::errors::{BankError, BankResult};

/// Registry of accounts keyed by their 8-digit id.
///
/// Owned by the caller; all cross-account operations go through here so the
/// registry can resolve ids before delegating to the entity.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: HashMap<String, Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Open an account and return its freshly generated id.
    ///
    /// A negative initial balance is rejected; it would break the rule that
    /// balances never go below zero. Zero is fine.
    pub fn create_account(&mut self, name: &str, initial_balance: Decimal) -> BankResult<String> {
        if initial_balance < Decimal::ZERO {
            return Err(BankError::InvalidAmount {
                amount: initial_balance,
            });
        }
        let id = self.generate_account_id();
        let account = Account::new(id.clone(), name.to_string(), initial_balance);
        info!("created account {} for {}", id, name);
        self.accounts.insert(id.clone(), account);
        Ok(id)
    }

    /// Random 8-digit ids, retried until one is unused.
    fn generate_account_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = rng.gen_range(10_000_000..=99_999_999u32).to_string();
            if !self.accounts.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    pub fn find_account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// All registered accounts, in no particular order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn get_account_mut(&mut self, account_id: &str) -> BankResult<&mut Account> {
        self.accounts
            .get_mut(account_id)
            .ok_or_else(|| BankError::AccountNotFound {
                account_id: account_id.to_string(),
            })
    }

    pub fn deposit(&mut self, account_id: &str, amount: Decimal) -> BankResult<Decimal> {
        self.get_account_mut(account_id)?.deposit(amount)
    }

    pub fn withdraw(&mut self, account_id: &str, amount: Decimal) -> BankResult<Decimal> {
        self.get_account_mut(account_id)?.withdraw(amount)
    }

    /// Authorize `payee_id` as a transfer destination for `account_id`.
    ///
    /// The existence check for the payee account lives here, not in the
    /// entity; the entity only guards against self and duplicates.
    pub fn add_payee(&mut self, account_id: &str, payee_id: &str) -> BankResult<()> {
        if !self.accounts.contains_key(payee_id) {
            return Err(BankError::PayeeAccountNotFound {
                account_id: payee_id.to_string(),
            });
        }
        self.get_account_mut(account_id)?.add_payee(payee_id)
    }

    /// Move `amount` from `from_id` to `to_id`.
    pub fn transfer(&mut self, from_id: &str, to_id: &str, amount: Decimal) -> BankResult<()> {
        if from_id == to_id {
            // Self can never be an authorized payee
            return Err(BankError::PayeeNotAuthorized {
                payee_id: to_id.to_string(),
            });
        }
        if !self.accounts.contains_key(from_id) {
            return Err(BankError::AccountNotFound {
                account_id: from_id.to_string(),
            });
        }
        // Take the recipient out to avoid two mutable borrows of the map
        let mut recipient = match self.accounts.remove(to_id) {
            Some(account) => account,
            None => {
                return Err(BankError::PayeeAccountNotFound {
                    account_id: to_id.to_string(),
                });
            }
        };

        let result = match self.accounts.get_mut(from_id) {
            Some(sender) => sender.transfer_to(amount, &mut recipient),
            None => Err(BankError::AccountNotFound {
                account_id: from_id.to_string(),
            }),
        };

        // Put the recipient back into the map
        self.accounts.insert(recipient.id().to_string(), recipient);
        result
    }
}
