//! Pluggable input sources for interactive prompts.
//!
//! The wizard reads values through the [`InputSource`] trait so tests can
//! supply canned responses instead of driving a real terminal.

use std::collections::VecDeque;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{DevcheckError, Result};

/// Source of user-entered values.
pub trait InputSource {
    /// Read one value for the given prompt text.
    fn read_value(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal-backed input using dialoguer.
#[derive(Default)]
pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn read_value(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| DevcheckError::Io(e.into()))?;
        Ok(value)
    }
}

/// Input source backed by a queue of canned responses.
///
/// Returns an error once the queue is exhausted, so a test that under-supplies
/// answers fails instead of hanging.
///
/// # Example
///
/// ```
/// use devcheck::wizard::{InputSource, QueuedInput};
///
/// let mut input = QueuedInput::new(vec!["first", "second"]);
/// assert_eq!(input.read_value("ignored").unwrap(), "first");
/// assert_eq!(input.read_value("ignored").unwrap(), "second");
/// assert!(input.read_value("ignored").is_err());
/// ```
#[derive(Debug, Default)]
pub struct QueuedInput {
    queue: VecDeque<String>,
}

impl QueuedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of responses still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for QueuedInput {
    fn read_value(&mut self, _prompt: &str) -> Result<String> {
        self.queue.pop_front().ok_or_else(|| {
            DevcheckError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "queued input exhausted",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_input_returns_responses_in_order() {
        let mut input = QueuedInput::new(vec!["a", "b", "c"]);
        assert_eq!(input.read_value("p").unwrap(), "a");
        assert_eq!(input.read_value("p").unwrap(), "b");
        assert_eq!(input.read_value("p").unwrap(), "c");
    }

    #[test]
    fn queued_input_errors_when_exhausted() {
        let mut input = QueuedInput::new(Vec::<String>::new());
        assert!(input.read_value("p").is_err());
    }

    #[test]
    fn queued_input_tracks_remaining() {
        let mut input = QueuedInput::new(vec!["x", "y"]);
        assert_eq!(input.remaining(), 2);
        input.read_value("p").unwrap();
        assert_eq!(input.remaining(), 1);
    }
}
