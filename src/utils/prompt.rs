use crate::error::Result;
use std::io::{self, BufRead, IsTerminal, Write};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Only a lone `y` (any case) counts as yes.
pub fn answer_is_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Reads the answer as a line from any reader. End of input means no.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Confirm for LinePrompt<R> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        print!("{message} [y/N]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(answer_is_yes(&input))
    }
}

/// Interactive prompt on a terminal, plain line input otherwise (pipes, CI,
/// redirected stderr).
pub struct TerminalPrompt;

/// dialoguer reads keys from stdin and draws on stderr, so both must be a
/// terminal.
pub fn use_interactive_prompt(stdin_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdin_is_terminal && stderr_is_terminal
}

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !use_interactive_prompt(io::stdin().is_terminal(), io::stderr().is_terminal()) {
            return LinePrompt::new(io::stdin().lock()).confirm(message);
        }

        let answer = dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .wait_for_newline(true)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }
}
