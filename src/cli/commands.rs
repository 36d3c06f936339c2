//! Handlers for the numbered menu actions.
//!
//! Each handler reads its fields, makes exactly one call into the banking service and
//! renders the outcome. Domain failures are handed back untouched for reporting.

use thiserror::Error;

use crate::{
    cli::{menu::MenuChoice, output, shell_context::ShellContext},
    currency::format_amount,
    domain::{Displayable, NamedEntity},
    errors::{BankError, CliError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Input closed")]
    EndOfInput,
    #[error("Exit requested")]
    ExitRequested,
}

impl From<BankError> for CommandError {
    fn from(err: BankError) -> Self {
        CommandError::Cli(CliError::Core(err))
    }
}

pub type CommandResult = Result<(), CommandError>;

pub(crate) fn dispatch(
    context: &mut ShellContext,
    choice: MenuChoice,
) -> Result<LoopControl, CommandError> {
    let outcome = match choice {
        MenuChoice::AddCustomer => add_customer(context),
        MenuChoice::CreateAccount => create_account(context),
        MenuChoice::Deposit => deposit(context),
        MenuChoice::Withdraw => withdraw(context),
        MenuChoice::DisplayAccounts => display_accounts(context),
        MenuChoice::DisplayTransactions => display_transactions(context),
        MenuChoice::Exit => exit(),
        MenuChoice::Invalid => {
            output::warning("Invalid choice. Please try again.");
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(LoopControl::Continue),
        Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
        Err(err) => Err(err),
    }
}

fn add_customer(context: &mut ShellContext) -> CommandResult {
    let name = context.text_field("Enter customer name: ")?;
    let customer_id = context.text_field("Enter customer ID: ")?;
    let customer = context.service.add_customer(name, customer_id);
    output::success(format!("Customer {} added successfully!", customer.name()));
    Ok(())
}

fn create_account(context: &mut ShellContext) -> CommandResult {
    let customer_id = context.text_field("Enter customer ID: ")?;
    let account_number = context.text_field("Enter account number: ")?;
    let opening_balance = context.amount_field("Enter initial balance: ")?;
    let created = context
        .service
        .add_account(&customer_id, account_number, opening_balance)?;
    output::success(format!(
        "Account {} created successfully!",
        created.account_number
    ));
    Ok(())
}

fn deposit(context: &mut ShellContext) -> CommandResult {
    let customer_id = context.text_field("Enter customer ID: ")?;
    let account_number = context.text_field("Enter account number: ")?;
    let amount = context.amount_field("Enter deposit amount: ")?;
    let balance = context
        .service
        .deposit(&customer_id, &account_number, amount)?;
    output::success("Deposit successful!");
    output::info(format!("Balance: {}", format_amount(balance, &context.format)));
    Ok(())
}

fn withdraw(context: &mut ShellContext) -> CommandResult {
    let customer_id = context.text_field("Enter customer ID: ")?;
    let account_number = context.text_field("Enter account number: ")?;
    let amount = context.amount_field("Enter withdrawal amount: ")?;
    let balance = context
        .service
        .withdraw(&customer_id, &account_number, amount)?;
    output::success("Withdrawal successful!");
    output::info(format!("Balance: {}", format_amount(balance, &context.format)));
    Ok(())
}

fn display_accounts(context: &mut ShellContext) -> CommandResult {
    let customer_id = context.text_field("Enter customer ID: ")?;
    let customer = context.service.find_customer(&customer_id)?;
    output::plain(customer.display_label());

    let mut listed = 0;
    for (number, balance) in customer.list_accounts() {
        output::plain(format!(
            "Account Number: {} | Balance: {}",
            number,
            format_amount(balance, &context.format)
        ));
        listed += 1;
    }
    if listed == 0 {
        output::info("No accounts found.");
    }
    Ok(())
}

fn display_transactions(context: &mut ShellContext) -> CommandResult {
    let customer_id = context.text_field("Enter customer ID: ")?;
    let account_number = context.text_field("Enter account number: ")?;
    let transactions = context
        .service
        .list_transactions(&customer_id, &account_number)?;

    output::plain(format!("Transactions for Account: {}", account_number));
    if transactions.is_empty() {
        output::info("No transactions recorded.");
    }
    for transaction in transactions {
        output::plain(transaction.label_with(|amount| format_amount(amount, &context.format)));
    }
    Ok(())
}

fn exit() -> CommandResult {
    output::plain("Exiting system. Goodbye!");
    Err(CommandError::ExitRequested)
}
