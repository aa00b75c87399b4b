//! Interactive posting loop
//!
//! Reads one line per iteration from the prompt and publishes it, until the
//! user types `exit` or `quit` or the input is closed. Failures to read or to
//! publish are reported and the loop moves on to the next prompt.

use std::io::{BufRead, Write};

use crate::error::{ClixError, Result};
use crate::platforms::Platform;
use crate::prompt::Prompt;

pub const POST_PROMPT: &str = "tweet: ";

/// Inputs that end the session instead of being posted (case-sensitive)
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

pub fn is_exit_command(text: &str) -> bool {
    EXIT_COMMANDS.contains(&text)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempted: usize,
    pub posted: usize,
    pub failed: usize,
}

pub struct Session<'a, P: Platform + ?Sized, R, W> {
    platform: &'a P,
    prompt: Prompt<R, W>,
}

impl<'a, P, R, W> Session<'a, P, R, W>
where
    P: Platform + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(platform: &'a P, prompt: Prompt<R, W>) -> Self {
        Self { platform, prompt }
    }

    /// Run until an exit command or end of input
    ///
    /// Read and publish failures are reported and the loop goes on; only a
    /// failure to write to the output ends it with an error.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let text = match self.prompt.line(POST_PROMPT) {
                Ok(Some(text)) => text,
                Ok(None) => {
                    tracing::debug!("Input closed, ending session");
                    self.prompt.say("")?;
                    break;
                }
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    self.prompt.say(&format!("Error reading input: {}", e))?;
                    continue;
                }
            };

            if is_exit_command(&text) {
                break;
            }

            summary.attempted += 1;
            match self.platform.post(&text).await {
                Ok(id) => {
                    summary.posted += 1;
                    tracing::info!("Posted to {}: {}", self.platform.name(), id);
                    self.prompt
                        .say(&format!("Tweet posted successfully! [ID: {}]\n", id))?;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("Failed to post to {}: {}", self.platform.name(), e);
                    let message = match &e {
                        ClixError::Platform(inner) => inner.to_string(),
                        other => other.to_string(),
                    };
                    self.prompt.say(&format!("Error posting tweet: {}", message))?;
                }
            }
        }

        self.prompt.say("Goodbye!")?;
        Ok(summary)
    }

    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }
}
