//! Interactive prompts for wsm.
//!
//! This module provides the user-facing collaborator boundary:
//! - [`Ui`] - Trait over the prompt surface (enables test doubles)
//! - [`ConsoleUi`] - Terminal implementation built on `inquire`
//!
//! Every selection-style call returns `Option`; `None` means the user
//! cancelled, which aborts the in-flight operation with no partial commit.

use inquire::{Confirm, InquireError, Select, Text};

use crate::error::Result;

/// Trait over the interactive prompt surface.
pub trait Ui {
    /// Asks for a line of free text, pre-filled with `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails for a reason other than
    /// cancellation.
    fn input(&self, prompt: &str, initial: &str) -> Result<Option<String>>;

    /// Asks for a single folder path.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails for a reason other than
    /// cancellation.
    fn pick_folder(&self) -> Result<Option<String>>;

    /// Asks the user to choose one of `labels`; returns the chosen index.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails for a reason other than
    /// cancellation.
    fn pick(&self, prompt: &str, labels: &[String]) -> Result<Option<usize>>;

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails for a reason other than
    /// cancellation.
    fn confirm(&self, prompt: &str) -> Result<Option<bool>>;

    /// Informational notice.
    fn info(&self, message: &str);

    /// Warning notice.
    fn warn(&self, message: &str);
}

/// Maps a prompt result so that Esc becomes `None` instead of an error.
fn cancellable<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Terminal prompt implementation.
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn input(&self, prompt: &str, initial: &str) -> Result<Option<String>> {
        cancellable(Text::new(prompt).with_initial_value(initial).prompt())
    }

    fn pick_folder(&self) -> Result<Option<String>> {
        let answer = cancellable(
            Text::new("Folder path:")
                .with_help_message("Absolute path to a folder; Esc to cancel")
                .prompt(),
        )?;

        let Some(path) = answer.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) else {
            return Ok(None);
        };

        if std::path::Path::new(&path).is_dir() {
            Ok(Some(path))
        } else {
            self.warn(&format!("'{path}' is not a folder."));
            Ok(None)
        }
    }

    fn pick(&self, prompt: &str, labels: &[String]) -> Result<Option<usize>> {
        let chosen = cancellable(Select::new(prompt, labels.to_vec()).raw_prompt())?;
        Ok(chosen.map(|option| option.index))
    }

    fn confirm(&self, prompt: &str) -> Result<Option<bool>> {
        cancellable(Confirm::new(prompt).with_default(false).prompt())
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        println!("Warning: {message}");
    }
}
