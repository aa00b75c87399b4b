//! Line-oriented interactive prompting
//!
//! Every read the program performs goes through [`Prompt`]: the credential
//! questions asked on first run and the `tweet: ` prompt of the posting loop.
//! It is generic over its input and output so tests can drive it with
//! in-memory buffers.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::config::{CredentialField, Credentials};

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// Prompt bound to the process's standard input and output
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `label` without a newline and read one trimmed line
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Write a full line of user-facing output
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Ask for every empty credential field, in fixed order
    ///
    /// A failed or exhausted read leaves the field empty; that is reported in
    /// the log but not treated as an error here. Returns the fields that were
    /// asked for.
    pub fn fill_missing(&mut self, credentials: &mut Credentials) -> Vec<CredentialField> {
        let missing = credentials.missing_fields();

        for field in &missing {
            match self.line(field.label()) {
                Ok(Some(value)) => credentials.set(*field, value),
                Ok(None) => {
                    tracing::warn!("Input closed while reading {}", field.key());
                    if let Err(e) = writeln!(self.output) {
                        tracing::warn!("Failed to write output: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", field.key(), e);
                }
            }
        }

        missing
    }

    /// Consume the prompt, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
