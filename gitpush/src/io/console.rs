//! Operator console: line prompts and output relay.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of operator-facing text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("write to console")?;
        Ok(())
    }

    /// Print `message` (no newline) and read one line, trimmed.
    ///
    /// End of input reads as an empty line.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        self.input.read_line(&mut line).context("read operator input")?;
        Ok(line.trim().to_string())
    }

    /// Block until the operator presses Enter.
    pub fn pause(&mut self) -> Result<()> {
        self.prompt("\nPress Enter to close...")?;
        self.say("")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_trims_and_echoes_message() {
        let mut console = Console::new("  42 \nnext\n".as_bytes(), Vec::new());
        assert_eq!(console.prompt("Pick: ").expect("prompt"), "42");
        assert_eq!(console.prompt("Again: ").expect("prompt"), "next");
        let out = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(out, "Pick: Again: ");
    }

    #[test]
    fn prompt_at_eof_is_empty() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        assert_eq!(console.prompt("> ").expect("prompt"), "");
    }
}
