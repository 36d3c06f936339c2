use std::env;

use tracing::debug;

use crate::cli::commands::{self, LoopControl};
use crate::cli::io::LineEvent;
use crate::cli::menu::{self, MenuChoice, CHOICE_PROMPT};
use crate::cli::output;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CliError;

/// When set, answers are read line by line from stdin instead of an interactive editor.
pub const SCRIPT_ENV: &str = "BANK_CORE_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    run(&mut context)
}

/// Drives the menu until the user exits, input ends, or an unrecoverable error occurs.
pub fn run(context: &mut ShellContext) -> Result<(), CliError> {
    while context.running {
        menu::render();

        let choice = match context.read_event(CHOICE_PROMPT)? {
            LineEvent::Line(line) => MenuChoice::parse(&line),
            LineEvent::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            LineEvent::Closed => {
                output::info("Input closed. Exiting system.");
                break;
            }
        };
        debug!(?choice, "menu choice");

        let control = match commands::dispatch(context, choice) {
            Ok(control) => control,
            Err(err) => context.report_error(err)?,
        };
        if control == LoopControl::Exit {
            context.running = false;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    use crate::cli::io::ScriptSource;
    use crate::config::Config;
    use std::io::Cursor;

    let script = lines.join("\n");
    let source = ScriptSource::new(Cursor::new(script.into_bytes()));
    let mut context =
        ShellContext::with_source(CliMode::Script, Box::new(source), &Config::default());
    run(&mut context)?;
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NamedEntity;

    #[test]
    fn script_runner_opens_and_funds_account() {
        let context = process_script(&[
            "1", "Alice", "C1", //
            "2", "C1", "A1", "100", //
            "3", "C1", "A1", "50", //
            "4", "C1", "A1", "200", //
            "7",
        ])
        .unwrap();

        let customer = context.service.find_customer("C1").unwrap();
        assert_eq!(customer.name(), "Alice");
        let account = customer.find_account("A1").unwrap();
        assert_eq!(account.balance(), 150.0);
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn exit_choice_stops_the_loop() {
        let context = process_script(&["7", "1", "Bob", "C2"]).unwrap();
        assert!(!context.running);
        assert_eq!(context.service.customer_count(), 0);
    }

    #[test]
    fn domain_errors_do_not_end_the_session() {
        let context = process_script(&[
            "3", "C9", "A1", "10", //
            "9", //
            "1", "Bob", "C2", //
            "7",
        ])
        .unwrap();
        assert_eq!(context.service.customer_count(), 1);
    }

    #[test]
    fn unparsable_amount_abandons_request() {
        let context = process_script(&[
            "1", "Alice", "C1", //
            "2", "C1", "A1", "lots", //
            "2", "C1", "A1", "inf", //
            "7",
        ])
        .unwrap();
        let customer = context.service.find_customer("C1").unwrap();
        assert!(customer.accounts().is_empty());
    }

    #[test]
    fn end_of_input_mid_request_exits_cleanly() {
        let context = process_script(&["1", "Alice"]).unwrap();
        assert!(!context.running);
        assert_eq!(context.service.customer_count(), 0);
    }
}
