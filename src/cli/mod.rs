pub mod commands;
pub mod io;
pub mod menu;
pub mod output;
mod shell;
pub mod shell_context;

pub use shell::{run, run_cli, SCRIPT_ENV};
pub use shell_context::{CliMode, ShellContext};
