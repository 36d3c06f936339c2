use crate::domain::common::Displayable;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{BankError, Result};

/// A customer-owned account holding a running balance and its append-only history.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: String,
    opening_balance: f64,
    balance: f64,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an account; the opening balance is taken as given, negatives included.
    pub fn new(account_number: impl Into<String>, opening_balance: f64) -> Self {
        Self {
            account_number: account_number.into(),
            opening_balance,
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn opening_balance(&self) -> f64 {
        self.opening_balance
    }

    /// Recorded events in the order they were applied.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Credits the account and records a deposit.
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        ensure_positive(amount)?;
        self.apply(TransactionKind::Deposit, amount);
        Ok(())
    }

    /// Debits the account and records a withdrawal. Overdrawing is rejected.
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.apply(TransactionKind::Withdrawal, amount);
        Ok(())
    }

    /// Replaces the account number. History and balance are untouched.
    pub fn rename(&mut self, account_number: impl Into<String>) {
        self.account_number = account_number.into();
    }

    /// Human-readable descriptions of every recorded event, oldest first.
    pub fn list_transactions(&self) -> impl Iterator<Item = String> + '_ {
        self.transactions.iter().map(Displayable::display_label)
    }

    // Validation has already happened; both fields change together.
    fn apply(&mut self, kind: TransactionKind, amount: f64) {
        let record = Transaction::new(kind, amount);
        self.balance += record.signed_amount();
        self.transactions.push(record);
    }
}

fn ensure_positive(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(BankError::InvalidAmount { amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replayed_balance(account: &Account) -> f64 {
        account.opening_balance()
            + account
                .transactions()
                .iter()
                .map(Transaction::signed_amount)
                .sum::<f64>()
    }

    #[test]
    fn deposit_records_one_transaction() {
        let mut account = Account::new("A1", 100.0);
        account.deposit(50.0).expect("deposit succeeds");

        assert_eq!(account.balance(), 150.0);
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(account.transactions()[0].kind(), TransactionKind::Deposit);
    }

    #[test]
    fn non_positive_amounts_leave_state_untouched() {
        let mut account = Account::new("A1", 10.0);
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = account.deposit(amount).expect_err("deposit must fail");
            assert!(matches!(err, BankError::InvalidAmount { .. }));
            let err = account.withdraw(amount).expect_err("withdraw must fail");
            assert!(matches!(err, BankError::InvalidAmount { .. }));
        }
        assert_eq!(account.balance(), 10.0);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn overdraw_is_rejected_but_exact_balance_is_allowed() {
        let mut account = Account::new("A1", 40.0);
        let err = account.withdraw(40.5).expect_err("overdraw must fail");
        assert_eq!(
            err,
            BankError::InsufficientFunds {
                requested: 40.5,
                available: 40.0
            }
        );
        assert!(account.transactions().is_empty());

        account.withdraw(40.0).expect("exact withdrawal succeeds");
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn negative_opening_balance_is_accepted() {
        let mut account = Account::new("A1", -20.0);
        assert_eq!(account.balance(), -20.0);
        assert!(account.withdraw(1.0).is_err());
        account.deposit(25.0).unwrap();
        assert_eq!(account.balance(), 5.0);
    }

    #[test]
    fn balance_matches_replayed_history() {
        let mut account = Account::new("A1", 12.0);
        let mut successes = 0;
        for (deposit, amount) in [
            (true, 8.0),
            (false, 30.0),
            (false, 15.0),
            (true, -1.0),
            (true, 2.5),
            (false, 7.5),
        ] {
            let outcome = if deposit {
                account.deposit(amount)
            } else {
                account.withdraw(amount)
            };
            if outcome.is_ok() {
                successes += 1;
            }
        }

        assert_eq!(account.transactions().len(), successes);
        assert_eq!(account.balance(), replayed_balance(&account));
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn rename_keeps_history_and_listing_is_restartable() {
        let mut account = Account::new("A1", 0.0);
        account.deposit(5.0).unwrap();
        account.rename("A1-NEW");
        account.rename("A1-NEW");

        assert_eq!(account.account_number(), "A1-NEW");
        assert_eq!(account.balance(), 5.0);
        let first: Vec<String> = account.list_transactions().collect();
        let second: Vec<String> = account.list_transactions().collect();
        assert_eq!(first, vec!["Transaction: Deposit | Amount: 5".to_string()]);
        assert_eq!(first, second);
    }
}
