//! Operator prompt abstraction.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use crate::error::PromptError;

/// A source of operator answers.
///
/// Implementations decide how text is shown and how answers are read. The
/// mapping interview only needs three answer shapes: free text, yes/no, and
/// non-negative counts.
pub trait Prompter {
    /// Show informational text (header listings, examples, notices).
    fn show(&mut self, text: &str);

    /// Ask for a line of free text. The answer may be empty.
    fn text(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError>;

    /// Ask for a non-negative whole number, re-asking until one is given.
    fn count(&mut self, prompt: &str) -> Result<usize, PromptError> {
        loop {
            let answer = self.text(prompt)?;
            let trimmed = answer.trim();
            match trimmed.parse::<usize>() {
                Ok(count) => return Ok(count),
                Err(_) => self.show(&format!("'{trimmed}' is not a number, try again.")),
            }
        }
    }
}

/// Interpret a yes/no answer. Accepts `y`, `yes`, `n`, `no` in any case.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompter fed from pre-recorded answers, for headless runs and tests.
///
/// Everything shown and asked is appended to a transcript.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Load answers from a file, one answer per line.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::new(contents.lines()))
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Everything shown and asked so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.transcript.push(prompt.to_string());
        let answer = self.answers.pop_front().ok_or_else(|| PromptError::Exhausted {
            prompt: prompt.to_string(),
        })?;
        self.transcript.push(format!("> {answer}"));
        Ok(answer)
    }
}

impl Prompter for ScriptedPrompter {
    fn show(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn text(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.next_answer(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None => self.show("Please answer y or n."),
            }
        }
    }
}
