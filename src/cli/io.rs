use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// One read from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Line(String),
    Interrupted,
    Closed,
}

/// Source of user answers. The menu loop never knows whether a human is typing.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent, CliError>;

    /// Asked after an interrupt at the menu prompt.
    fn confirm_exit(&mut self) -> Result<bool, CliError> {
        Ok(true)
    }
}

/// Newline-separated answers from any buffered reader, one per prompt.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<LineEvent, CliError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(LineEvent::Closed);
        }
        let line = buffer.trim_end_matches(&['\n', '\r'][..]);
        Ok(LineEvent::Line(line.to_string()))
    }
}

/// Interactive terminal input with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
    theme: ColorfulTheme,
}

impl EditorSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme: ColorfulTheme::default(),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(LineEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(LineEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(LineEvent::Closed),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm_exit(&mut self) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit banking system?")
            .default(false)
            .interact()
            .map_err(CliError::from)
    }
}
