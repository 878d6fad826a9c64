//! Interactive console abstraction.
//!
//! The session talks to the operator only through [`Console`]. Implementors
//! supply two primitives, styled output and raw line input. Validated
//! prompts (bounded index, text with default, yes/no) are provided on top of
//! them, so the re-prompt contract is the same for the terminal and for test
//! doubles.

pub mod table;
pub mod terminal;

pub use terminal::TerminalConsole;

use crate::domain::Contact;
use crate::error::ConsoleResult;

/// Visual weight of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Dim,
}

pub trait Console {
    /// Print one message.
    fn say(&mut self, tone: Tone, message: &str);

    /// Read one raw line of input after showing `prompt`.
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String>;

    /// Print the numbered contact table.
    fn show_contacts(&mut self, title: &str, contacts: &[Contact]) {
        let rendered = table::render_contacts(title, contacts);
        self.say(Tone::Plain, &rendered);
    }

    /// Print a boxed panel.
    fn show_panel(&mut self, title: &str, body: &str) {
        let rendered = table::render_panel(title, body);
        self.say(Tone::Plain, &rendered);
    }

    /// Ask for an integer in `0..=max`, re-prompting until one is given.
    fn prompt_index(&mut self, message: &str, max: usize) -> ConsoleResult<usize> {
        let prompt = format!("{} [0-{}]: ", message, max);
        loop {
            let input = self.read_line(&prompt)?;
            match parse_index(&input, max) {
                Some(index) => return Ok(index),
                None => self.say(Tone::Error, "Please select one of the available options"),
            }
        }
    }

    /// Ask for free text. Empty input yields `default`; without a default,
    /// empty input is re-prompted.
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> ConsoleResult<String> {
        let prompt = match default {
            Some(default) => format!("{} ({}): ", message, default),
            None => format!("{}: ", message),
        };
        loop {
            let input = self.read_line(&prompt)?;
            let input = input.trim();
            if !input.is_empty() {
                return Ok(input.to_string());
            }
            if let Some(default) = default {
                return Ok(default.to_string());
            }
        }
    }

    /// Ask a yes/no question. Empty input yields `default`.
    fn confirm(&mut self, message: &str, default: bool) -> ConsoleResult<bool> {
        let prompt = format!("{} [y/n] ({}): ", message, if default { "y" } else { "n" });
        loop {
            let input = self.read_line(&prompt)?;
            match parse_yes_no(&input, default) {
                Some(answer) => return Ok(answer),
                None => self.say(Tone::Error, "Please enter Y or N"),
            }
        }
    }
}

/// Parse a selection in `0..=max`.
pub fn parse_index(input: &str, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&index| index <= max)
}

/// Parse a yes/no answer; empty input takes the default.
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

const BANNER_ART: &str = r#"
  _____  _                 _       _      _
 |  __ \(_)               | |     | |    | |
 | |  | |_ ___ _ __   __ _| |_ ___| |__  | |
 | |  | | / __| '_ \ / _` | __/ __| '_ \ | |
 | |__| | \__ \ |_) | (_| | || (__| | | ||_|
 |_____/|_|___/ .__/ \__,_|\__\___|_| |_|(_)
              | |
              |_|
"#;

/// Print the startup banner and welcome text.
pub fn banner(console: &mut dyn Console) {
    let rule = "=".repeat(60);
    console.say(Tone::Info, &rule);
    console.say(Tone::Success, BANNER_ART);
    console.say(Tone::Info, &rule);
    console.say(Tone::Plain, "  Dispatch: The Fast-Track Connection Engine");
    console.say(Tone::Info, &rule);
    console.say(
        Tone::Plain,
        "\nWelcome to Dispatch! Find your point of contact instantly.\n\
         Whether it's an email, a phone number, or a social profile, we bridge\n\
         the gap between your inquiry and their inbox.\n",
    );
}
