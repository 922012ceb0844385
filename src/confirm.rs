//! Confirmation gate before any folder is touched

use crate::MergeError;
use dialoguer::{Confirm, theme::ColorfulTheme};

/// Decides whether a run may proceed
pub trait Confirmation {
    /// Ask whether to go ahead
    ///
    /// # Errors
    /// Returns `MergeError::Prompt` if the answer cannot be read.
    fn confirm(&self, prompt: &str) -> Result<bool, MergeError>;
}

/// Proceeds without asking (`--force`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysProceed;

impl Confirmation for AlwaysProceed {
    fn confirm(&self, _prompt: &str) -> Result<bool, MergeError> {
        Ok(true)
    }
}

/// Asks on the terminal and waits for an answer
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirmation;

impl Confirmation for PromptConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool, MergeError> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(true)
            .interact()?;
        Ok(answer)
    }
}

/// Pick the confirmation behavior for the given `force` setting
#[must_use]
pub fn for_force(force: bool) -> Box<dyn Confirmation> {
    if force {
        Box::new(AlwaysProceed)
    } else {
        Box::new(PromptConfirmation)
    }
}
