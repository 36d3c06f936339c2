//! Orchestration of customer and account operations for the in-memory bank.

use tracing::debug;

use crate::domain::{Account, AccountCreated, Customer, Transaction};
use crate::errors::{BankError, Result};

/// Owns every customer for the lifetime of the process.
///
/// Lookups are linear and first-match-wins; identifiers are never checked for
/// uniqueness. Mutating operations borrow the owning customer exclusively for
/// the duration of the call, so no handle outlives a structural change.
#[derive(Debug, Default)]
pub struct BankingService {
    customers: Vec<Customer>,
}

impl BankingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Registers a customer. Always succeeds, even for a repeated identifier.
    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> &Customer {
        let customer = Customer::new(name, customer_id);
        debug!(customer_id = customer.customer_id(), "customer added");
        self.customers.push(customer);
        &self.customers[self.customers.len() - 1]
    }

    pub fn find_customer(&self, customer_id: &str) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.customer_id() == customer_id)
            .ok_or_else(|| BankError::CustomerNotFound(customer_id.to_string()))
    }

    pub fn find_customer_mut(&mut self, customer_id: &str) -> Result<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|customer| customer.customer_id() == customer_id)
            .ok_or_else(|| BankError::CustomerNotFound(customer_id.to_string()))
    }

    pub fn add_account(
        &mut self,
        customer_id: &str,
        account_number: impl Into<String>,
        opening_balance: f64,
    ) -> Result<AccountCreated> {
        let created = self
            .find_customer_mut(customer_id)?
            .add_account(account_number, opening_balance);
        debug!(
            customer_id,
            account_number = %created.account_number,
            opening_balance,
            "account opened"
        );
        Ok(created)
    }

    pub fn deposit(
        &mut self,
        customer_id: &str,
        account_number: &str,
        amount: f64,
    ) -> Result<f64> {
        let account = self
            .account_mut(customer_id, account_number)
            .inspect_err(|err| debug!(customer_id, account_number, %err, "deposit rejected"))?;
        account
            .deposit(amount)
            .inspect_err(|err| debug!(customer_id, account_number, %err, "deposit rejected"))?;
        debug!(
            customer_id,
            account_number,
            amount,
            balance = account.balance(),
            "deposit applied"
        );
        Ok(account.balance())
    }

    pub fn withdraw(
        &mut self,
        customer_id: &str,
        account_number: &str,
        amount: f64,
    ) -> Result<f64> {
        let account = self
            .account_mut(customer_id, account_number)
            .inspect_err(|err| debug!(customer_id, account_number, %err, "withdrawal rejected"))?;
        account
            .withdraw(amount)
            .inspect_err(|err| debug!(customer_id, account_number, %err, "withdrawal rejected"))?;
        debug!(
            customer_id,
            account_number,
            amount,
            balance = account.balance(),
            "withdrawal applied"
        );
        Ok(account.balance())
    }

    pub fn rename_customer(&mut self, customer_id: &str, name: impl Into<String>) -> Result<()> {
        self.find_customer_mut(customer_id)?.rename(name);
        debug!(customer_id, "customer renamed");
        Ok(())
    }

    pub fn rename_account(
        &mut self,
        customer_id: &str,
        old_number: &str,
        new_number: impl Into<String>,
    ) -> Result<()> {
        self.find_customer_mut(customer_id)?
            .rename_account(old_number, new_number)?;
        debug!(customer_id, old_number, "account renumbered");
        Ok(())
    }

    /// `(account number, balance)` pairs for one customer, in opening order.
    pub fn list_accounts(
        &self,
        customer_id: &str,
    ) -> Result<impl Iterator<Item = (&str, f64)> + '_> {
        Ok(self.find_customer(customer_id)?.list_accounts())
    }

    pub fn list_transactions(
        &self,
        customer_id: &str,
        account_number: &str,
    ) -> Result<&[Transaction]> {
        let account = self
            .find_customer(customer_id)?
            .find_account(account_number)?;
        Ok(account.transactions())
    }

    fn account_mut(&mut self, customer_id: &str, account_number: &str) -> Result<&mut Account> {
        self.find_customer_mut(customer_id)?
            .find_account_mut(account_number)
    }
}
