mod common;

use bank_core::config::Config;
use common::{colorless, script_command};
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn script_mode_runs_banking_session() {
    let (mut cmd, _home) = script_command(&colorless());
    let script = "\
1
Alice
C1
2
C1
A1
100
3
C1
A1
50
4
C1
A1
200
5
C1
6
C1
A1
7
";

    cmd.write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Customer Alice added successfully!")
                .and(contains("Account A1 created successfully!"))
                .and(contains("Deposit successful!"))
                .and(contains("Insufficient balance"))
                .and(contains("Customer: Alice | Customer ID: C1"))
                .and(contains("Account Number: A1 | Balance: 150"))
                .and(contains("Transactions for Account: A1"))
                .and(contains("Transaction: Deposit | Amount: 50"))
                .and(contains("Exiting system. Goodbye!")),
        );
}

#[test]
fn exit_choice_terminates_before_remaining_input() {
    let (mut cmd, _home) = script_command(&colorless());
    cmd.write_stdin("7\n1\nBob\nC2\n")
        .assert()
        .success()
        .stdout(contains("Exiting system. Goodbye!").and(contains("Bob").not()));
}

#[test]
fn invalid_choices_are_reported_and_loop_continues() {
    let (mut cmd, _home) = script_command(&colorless());
    cmd.write_stdin("9\nabc\n5\nC1\n7\n")
        .assert()
        .success()
        .stdout(
            contains("Invalid choice. Please try again.")
                .and(contains("Customer not found: C1"))
                .and(contains("Exiting system. Goodbye!")),
        );
}

#[test]
fn unparsable_amount_is_rejected() {
    let (mut cmd, _home) = script_command(&colorless());
    cmd.write_stdin("1\nAlice\nC1\n2\nC1\nA1\nten\n5\nC1\n7\n")
        .assert()
        .success()
        .stdout(contains("Invalid amount input: ten").and(contains("No accounts found.")));
}

#[test]
fn configured_amount_format_is_used() {
    let config = Config {
        currency_symbol: Some("$".into()),
        amount_precision: Some(2),
        ..colorless()
    };
    let (mut cmd, _home) = script_command(&config);
    cmd.write_stdin("1\nAlice\nC1\n2\nC1\nA1\n100\n3\nC1\nA1\n0.5\n6\nC1\nA1\n7\n")
        .assert()
        .success()
        .stdout(contains("Balance: $100.50").and(contains("Amount: $0.50")));
}

#[test]
fn end_of_input_exits_cleanly() {
    let (mut cmd, _home) = script_command(&colorless());
    cmd.write_stdin("1\nAlice\n")
        .assert()
        .success()
        .stdout(contains("added successfully").not());
}

#[test]
fn rust_log_enables_service_debug_events() {
    let (mut cmd, _home) = script_command(&colorless());
    cmd.env("RUST_LOG", "bank_core=debug")
        .write_stdin("1\nAlice\nC1\n2\nC1\nA1\n10\n4\nC1\nA1\n25\n7\n")
        .assert()
        .success()
        .stderr(
            contains("customer added")
                .and(contains("account opened"))
                .and(contains("withdrawal rejected")),
        );
}

#[test]
fn service_events_are_silent_by_default() {
    let (mut cmd, _home) = script_command(&colorless());
    cmd.env_remove("RUST_LOG")
        .write_stdin("1\nAlice\nC1\n7\n")
        .assert()
        .success()
        .stderr(contains("customer added").not());
}
