//! Terminal-backed console: `rustyline` for input, `crossterm` for styling.

use super::{Console, Tone};
use crate::error::{ConsoleError, ConsoleResult};
use crossterm::style::Stylize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Console on the process's terminal.
///
/// Ctrl-C at a prompt surfaces as [`ConsoleError::Interrupted`], Ctrl-D as
/// [`ConsoleError::Eof`]. Styling honours `NO_COLOR`.
pub struct TerminalConsole {
    editor: DefaultEditor,
}

impl TerminalConsole {
    pub fn new() -> ConsoleResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| ConsoleError::Io(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, tone: Tone, message: &str) {
        match tone {
            Tone::Plain => println!("{}", message),
            Tone::Info => println!("{}", message.blue()),
            Tone::Success => println!("{}", message.green().bold()),
            Tone::Warning => println!("{}", message.yellow().bold()),
            Tone::Error => println!("{}", message.red().bold()),
            Tone::Dim => println!("{}", message.dim()),
        }
    }

    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(ConsoleError::Interrupted),
            Err(ReadlineError::Eof) => Err(ConsoleError::Eof),
            Err(e) => Err(ConsoleError::Io(e.to_string())),
        }
    }
}
