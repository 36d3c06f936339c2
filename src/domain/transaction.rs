use std::fmt;

use crate::domain::common::Displayable;

/// Direction of a single ledger event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// Immutable record of one successful deposit or withdrawal.
///
/// Only [`crate::domain::Account`] creates these, after it has validated the amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: f64,
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, amount: f64) -> Self {
        Self { kind, amount }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Signed effect of this record on the owning account's balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }

    /// Description with the amount rendered by `render_amount`.
    pub fn label_with(&self, render_amount: impl FnOnce(f64) -> String) -> String {
        format!(
            "Transaction: {} | Amount: {}",
            self.kind,
            render_amount(self.amount)
        )
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        self.label_with(|amount| amount.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_kind_and_amount() {
        let deposit = Transaction::new(TransactionKind::Deposit, 50.0);
        assert_eq!(deposit.display_label(), "Transaction: Deposit | Amount: 50");

        let withdrawal = Transaction::new(TransactionKind::Withdrawal, 12.5);
        assert_eq!(
            withdrawal.display_label(),
            "Transaction: Withdrawal | Amount: 12.5"
        );
        assert_eq!(withdrawal.signed_amount(), -12.5);
    }

    #[test]
    fn label_with_delegates_amount_rendering() {
        let deposit = Transaction::new(TransactionKind::Deposit, 0.5);
        assert_eq!(
            deposit.label_with(|amount| format!("${:.2}", amount)),
            "Transaction: Deposit | Amount: $0.50"
        );
    }
}
