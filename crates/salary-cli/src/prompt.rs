//! Terminal prompter backed by `dialoguer`.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use salary_map::{PromptError, Prompter};

/// Asks the interview questions on the controlling terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn text(&mut self, prompt: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        // dialoguer renders its own [y/n] hint.
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt.trim_end_matches(" (y/n)"))
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> PromptError {
    let dialoguer::Error::IO(err) = err;
    if err.kind() == io::ErrorKind::Interrupted {
        PromptError::Interrupted
    } else {
        PromptError::Io(err)
    }
}
