use std::io;

use crate::{
    cli::{
        commands::{CommandError, LoopControl},
        io::{EditorSource, LineEvent, LineSource, ScriptSource},
        output::{self, OutputPreferences},
    },
    config::{Config, ConfigManager},
    core::services::BankingService,
    currency::AmountFormat,
    errors::CliError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one console session owns: the bank, the input source and display preferences.
pub struct ShellContext {
    pub mode: CliMode,
    pub service: BankingService,
    pub format: AmountFormat,
    pub running: bool,
    source: Box<dyn LineSource>,
}

impl ShellContext {
    /// Builds a session on stdin, loading preferences from the config directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        output::set_preferences(OutputPreferences::from(&config));

        let source: Box<dyn LineSource> = match mode {
            CliMode::Interactive => Box::new(EditorSource::new()?),
            CliMode::Script => Box::new(ScriptSource::new(io::stdin().lock())),
        };
        Ok(Self::with_source(mode, source, &config))
    }

    pub fn with_source(mode: CliMode, source: Box<dyn LineSource>, config: &Config) -> Self {
        Self {
            mode,
            service: BankingService::new(),
            format: AmountFormat::from_config(config),
            running: true,
            source,
        }
    }

    pub(crate) fn read_event(&mut self, prompt: &str) -> Result<LineEvent, CliError> {
        self.source.read_line(prompt)
    }

    pub(crate) fn confirm_exit(&mut self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        self.source.confirm_exit()
    }

    /// Reads one text answer, trimmed of surrounding whitespace.
    pub(crate) fn text_field(&mut self, prompt: &str) -> Result<String, CommandError> {
        match self.read_event(prompt)? {
            LineEvent::Line(line) => Ok(line.trim().to_string()),
            LineEvent::Interrupted => Err(CommandError::Cancelled),
            LineEvent::Closed => Err(CommandError::EndOfInput),
        }
    }

    /// Reads one numeric answer. Non-numeric and non-finite input is rejected here;
    /// positivity is left to the ledger.
    pub(crate) fn amount_field(&mut self, prompt: &str) -> Result<f64, CommandError> {
        let text = self.text_field(prompt)?;
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CliError::Input(text).into()),
        }
    }

    /// Renders a failed request. Only unrecoverable errors escape.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<LoopControl, CliError> {
        match err {
            CommandError::ExitRequested | CommandError::EndOfInput => Ok(LoopControl::Exit),
            CommandError::Cancelled => {
                output::warning("Request cancelled.");
                Ok(LoopControl::Continue)
            }
            CommandError::Cli(err) if err.is_recoverable() => {
                output::error(&err);
                Ok(LoopControl::Continue)
            }
            CommandError::Cli(err) => Err(err),
        }
    }
}
