use std::collections::HashSet;

use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{BankError, BankResult};

/// A customer account: balance, payee allow-list and transaction log.
///
/// Fields stay private so the balance can only move through the operations
/// below, which keep it non-negative and append one log entry per mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    id: String,
    name: String,
    balance: Decimal,
    payees: HashSet<String>,
    transactions: Vec<String>,
}

impl Account {
    /// Built by the bank registry, which owns id generation and uniqueness.
    pub(crate) fn new(id: String, name: String, initial_balance: Decimal) -> Self {
        let mut account = Self {
            id,
            name,
            balance: initial_balance,
            payees: HashSet::new(),
            transactions: Vec::new(),
        };
        account.log(format!("Account created with balance ${}", initial_balance));
        account
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn payees(&self) -> &HashSet<String> {
        &self.payees
    }

    /// Append-only history, oldest entry first.
    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }

    /// Add `amount` to the balance and return the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> BankResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount { amount });
        }
        self.balance += amount;
        self.log(format!("Deposited ${}", amount));
        Ok(self.balance)
    }

    /// Take `amount` from the balance and return the new balance.
    pub fn withdraw(&mut self, amount: Decimal) -> BankResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(BankError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.log(format!("Withdrew ${}", amount));
        Ok(self.balance)
    }

    /// Authorize `payee_id` as a transfer destination.
    ///
    /// Does not check that `payee_id` refers to an existing account; callers
    /// going through [`Bank::add_payee`](crate::bank::Bank::add_payee) get
    /// that check from the registry. Standalone users must supply their own.
    pub fn add_payee(&mut self, payee_id: &str) -> BankResult<()> {
        if payee_id == self.id {
            return Err(BankError::SelfPayee);
        }
        if self.payees.contains(payee_id) {
            return Err(BankError::DuplicatePayee {
                payee_id: payee_id.to_string(),
            });
        }
        self.payees.insert(payee_id.to_string());
        self.log(format!("Payee added: {}", payee_id));
        Ok(())
    }

    /// Move `amount` from this account to `recipient`.
    ///
    /// Every check runs before either side mutates, so a failure leaves no
    /// partial debited-but-not-credited state.
    pub fn transfer_to(&mut self, amount: Decimal, recipient: &mut Account) -> BankResult<()> {
        if !self.payees.contains(recipient.id.as_str()) {
            return Err(BankError::PayeeNotAuthorized {
                payee_id: recipient.id.clone(),
            });
        }
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(BankError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        recipient.balance += amount;
        self.log(format!("Transferred ${} to {}", amount, recipient.id));
        recipient.log(format!("Received ${} from {}", amount, self.id));
        Ok(())
    }

    fn log(&mut self, entry: String) {
        debug!("[{}] {}", self.id, entry);
        self.transactions.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(id: &str, balance: Decimal) -> Account {
        Account::new(id.to_string(), format!("Holder {}", id), balance)
    }

    #[test]
    fn test_new_account_logs_creation() {
        let acc = account("10000001", dec!(100));
        assert_eq!(acc.balance(), dec!(100));
        assert_eq!(acc.transactions().len(), 1);
        assert_eq!(acc.transactions()[0], "Account created with balance $100");
        assert!(acc.payees().is_empty());
    }

    #[test]
    fn test_deposit() {
        let mut acc = account("10000001", dec!(0));
        let balance = acc.deposit(dec!(100.50)).unwrap();
        assert_eq!(balance, dec!(100.50));
        assert_eq!(acc.transactions().last().unwrap(), "Deposited $100.50");
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut acc = account("10000001", dec!(50));
        let before = acc.transactions().len();

        let err = acc.deposit(dec!(0)).unwrap_err();
        assert_eq!(err.code(), "invalid_amount");
        let err = acc.deposit(dec!(-10)).unwrap_err();
        assert_eq!(err.code(), "invalid_amount");

        // No mutation on failure
        assert_eq!(acc.balance(), dec!(50));
        assert_eq!(acc.transactions().len(), before);
    }

    #[test]
    fn test_withdraw() {
        let mut acc = account("10000001", dec!(100));
        let balance = acc.withdraw(dec!(40)).unwrap();
        assert_eq!(balance, dec!(60));
        assert_eq!(acc.transactions().last().unwrap(), "Withdrew $40");
    }

    #[test]
    fn test_withdraw_insufficient_balance() {
        let mut acc = account("10000001", dec!(60));
        let before = acc.transactions().len();

        let err = acc.withdraw(dec!(1000)).unwrap_err();
        assert_eq!(
            err,
            BankError::InsufficientBalance {
                requested: dec!(1000),
                available: dec!(60),
            }
        );
        assert_eq!(acc.balance(), dec!(60));
        assert_eq!(acc.transactions().len(), before);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut acc = account("10000001", dec!(60));
        assert_eq!(acc.withdraw(dec!(-1)).unwrap_err().code(), "invalid_amount");
        assert_eq!(acc.balance(), dec!(60));
    }

    #[test]
    fn test_add_payee() {
        let mut acc = account("10000001", dec!(0));
        acc.add_payee("10000002").unwrap();
        assert!(acc.payees().contains("10000002"));
        assert_eq!(acc.transactions().last().unwrap(), "Payee added: 10000002");
    }

    #[test]
    fn test_add_payee_rejects_self() {
        let mut acc = account("10000001", dec!(0));
        assert_eq!(acc.add_payee("10000001").unwrap_err(), BankError::SelfPayee);
        assert!(acc.payees().is_empty());
    }

    #[test]
    fn test_add_payee_rejects_duplicate() {
        let mut acc = account("10000001", dec!(0));
        acc.add_payee("10000002").unwrap();
        let before = acc.transactions().len();

        let err = acc.add_payee("10000002").unwrap_err();
        assert_eq!(err.code(), "duplicate_payee");
        assert_eq!(acc.payees().len(), 1);
        assert_eq!(acc.transactions().len(), before);
    }

    #[test]
    fn test_transfer_moves_funds_and_logs_both_sides() {
        let mut alice = account("10000001", dec!(100));
        let mut bob = account("10000002", dec!(0));
        alice.add_payee(bob.id()).unwrap();

        alice.transfer_to(dec!(40), &mut bob).unwrap();

        assert_eq!(alice.balance(), dec!(60));
        assert_eq!(bob.balance(), dec!(40));
        // Sum is preserved across the transfer
        assert_eq!(alice.balance() + bob.balance(), dec!(100));
        assert_eq!(
            alice.transactions().last().unwrap(),
            "Transferred $40 to 10000002"
        );
        assert_eq!(
            bob.transactions().last().unwrap(),
            "Received $40 from 10000001"
        );
    }

    #[test]
    fn test_transfer_requires_authorized_payee() {
        let mut alice = account("10000001", dec!(100));
        let mut bob = account("10000002", dec!(0));

        let err = alice.transfer_to(dec!(40), &mut bob).unwrap_err();
        assert_eq!(err.code(), "payee_not_authorized");
        assert_eq!(alice.balance(), dec!(100));
        assert_eq!(bob.balance(), dec!(0));
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut alice = account("10000001", dec!(30));
        let mut bob = account("10000002", dec!(0));
        alice.add_payee(bob.id()).unwrap();
        let alice_log = alice.transactions().len();
        let bob_log = bob.transactions().len();

        let err = alice.transfer_to(dec!(40), &mut bob).unwrap_err();
        assert_eq!(err.code(), "insufficient_balance");
        assert_eq!(alice.balance(), dec!(30));
        assert_eq!(bob.balance(), dec!(0));
        assert_eq!(alice.transactions().len(), alice_log);
        assert_eq!(bob.transactions().len(), bob_log);
    }

    #[test]
    fn test_transfer_rejects_non_positive() {
        let mut alice = account("10000001", dec!(100));
        let mut bob = account("10000002", dec!(50));
        alice.add_payee(bob.id()).unwrap();

        let err = alice.transfer_to(dec!(-10), &mut bob).unwrap_err();
        assert_eq!(err.code(), "invalid_amount");
        assert_eq!(alice.balance(), dec!(100));
        assert_eq!(bob.balance(), dec!(50));
    }
}
