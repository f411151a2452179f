// src/infrastructure/terminal.rs
use crate::application::Dialog;
use std::io::{self, BufRead, BufReader, Stdin, Stderr, Write};
use tracing::warn;

/// `Dialog` on a terminal: alerts go to the writer, confirmations are read
/// as a `y`/`yes` line from the reader.
pub struct TerminalDialog<R: BufRead, W: Write> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalDialog<BufReader<Stdin>, Stderr> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Dialog for TerminalDialog<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "Error: {}", message) {
            warn!(%e, alert = message, "Could not display alert");
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if let Err(e) = write!(self.output, "{} [y/N] ", message).and_then(|_| self.output.flush()) {
            warn!(%e, "Could not display confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(%e, "Could not read confirmation");
                false
            }
        }
    }
}
