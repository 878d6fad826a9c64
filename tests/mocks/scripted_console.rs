use dispatch::console::{Console, Tone};
use dispatch::error::{ConsoleError, ConsoleResult};
use std::collections::VecDeque;

/// Console that replays scripted input lines and captures all output.
///
/// When the script runs out, `read_line` reports end of input, the same way
/// a closed terminal does.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedConsole {
    input: VecDeque<Result<String, ConsoleError>>,
    pub output: Vec<(Tone, String)>,
    pub prompts: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(|l| Ok(l.into())).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Queue an error (e.g. Ctrl-C) after the scripted lines.
    pub fn then_fail(mut self, error: ConsoleError) -> Self {
        self.input.push_back(Err(error));
        self
    }

    /// All output joined into one string.
    pub fn transcript(&self) -> String {
        self.output
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of messages printed with `tone`.
    pub fn count(&self, tone: Tone) -> usize {
        self.output.iter().filter(|(t, _)| *t == tone).count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, tone: Tone, message: &str) {
        self.output.push((tone, message.to_string()));
    }

    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().unwrap_or(Err(ConsoleError::Eof))
    }
}
