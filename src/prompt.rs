//! Interactive prompts
//!
//! One free-text line for the query, one single-select list for the result.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use thiserror::Error;

use crate::models::SearchItem;

/// Prompt shown for the search query
pub const QUERY_PROMPT: &str = "Search movies or episodes";

/// Prompt shown above the result list
pub const SELECT_PROMPT: &str = "Select an item";

/// Errors from user prompts
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
    #[error("Selection cancelled")]
    Cancelled,
}

/// Source of user input for one run
pub trait Prompter {
    /// Read one line of free text
    fn read_query(&mut self) -> Result<String, PromptError>;

    /// Pick one of `items`, returning its index
    fn select(&mut self, items: &[SearchItem]) -> Result<usize, PromptError>;
}

/// Prompter on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_query(&mut self) -> Result<String, PromptError> {
        let query: String = Input::with_theme(&self.theme)
            .with_prompt(QUERY_PROMPT)
            .allow_empty(true)
            .interact_text()?;
        Ok(query)
    }

    fn select(&mut self, items: &[SearchItem]) -> Result<usize, PromptError> {
        let labels: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        Select::with_theme(&self.theme)
            .with_prompt(SELECT_PROMPT)
            .items(&labels)
            .default(0)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }
}
