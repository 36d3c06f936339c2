use crate::domain::account::Account;
use crate::domain::common::{Displayable, NamedEntity};
use crate::errors::{BankError, Result};

/// Confirmation returned when a customer opens a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreated {
    pub account_number: String,
}

/// A named customer and the accounts they own, in opening order.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    customer_id: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customer_id: customer_id.into(),
            accounts: Vec::new(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Opens an account. Account numbers are not checked for uniqueness.
    pub fn add_account(
        &mut self,
        account_number: impl Into<String>,
        opening_balance: f64,
    ) -> AccountCreated {
        let account = Account::new(account_number, opening_balance);
        let created = AccountCreated {
            account_number: account.account_number().to_string(),
        };
        self.accounts.push(account);
        created
    }

    /// First account whose number matches exactly.
    pub fn find_account(&self, account_number: &str) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
            .ok_or_else(|| BankError::AccountNotFound(account_number.to_string()))
    }

    /// Mutable counterpart of [`Customer::find_account`]; the borrow is scoped to `self`.
    pub fn find_account_mut(&mut self, account_number: &str) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number() == account_number)
            .ok_or_else(|| BankError::AccountNotFound(account_number.to_string()))
    }

    pub fn rename_account(
        &mut self,
        old_number: &str,
        new_number: impl Into<String>,
    ) -> Result<()> {
        self.find_account_mut(old_number)?.rename(new_number);
        Ok(())
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// `(account number, balance)` pairs in opening order.
    pub fn list_accounts(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.accounts
            .iter()
            .map(|account| (account.account_number(), account.balance()))
    }
}

impl NamedEntity for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Customer {
    fn display_label(&self) -> String {
        format!("Customer: {} | Customer ID: {}", self.name, self.customer_id)
    }
}
