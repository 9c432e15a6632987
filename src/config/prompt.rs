// file: src/config/prompt.rs
// version: 1.0.0
// guid: 2d5f8b14-6e3a-4c97-a0d2-8e1b7c4f9a36

//! Line prompts with default-value fallback

use crate::error::BundlerError;
use crate::Result;
use dialoguer::Input;

/// Source of answers for configuration prompts
pub trait Prompter {
    /// Ask for one value. Returns the trimmed answer, the default when the
    /// answer is blank, and only returns an empty string if `allow_empty`.
    fn prompt(&mut self, label: &str, default: &str, allow_empty: bool) -> Result<String>;
}

/// Apply the default and emptiness rules to one raw answer.
///
/// `None` means the answer is not acceptable and the question must be asked
/// again.
pub fn resolve_answer(raw: &str, default: &str, allow_empty: bool) -> Option<String> {
    let answer = raw.trim();
    let default = default.trim();

    let value = if answer.is_empty() && !default.is_empty() {
        default
    } else {
        answer
    };

    if value.is_empty() && !allow_empty {
        None
    } else {
        Some(value.to_string())
    }
}

/// Format the label the way the prompt line shows it
pub fn prompt_label(label: &str, default: &str) -> String {
    if default.trim().is_empty() {
        label.to_string()
    } else {
        format!("{} [{}]", label, default.trim())
    }
}

/// Interactive prompter backed by the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, label: &str, default: &str, allow_empty: bool) -> Result<String> {
        let shown = prompt_label(label, default);
        loop {
            let raw = Input::<String>::new()
                .with_prompt(&shown)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| BundlerError::PromptError(format!("{}: {}", label, e)))?;

            if let Some(value) = resolve_answer(&raw, default, allow_empty) {
                println!();
                return Ok(value);
            }
        }
    }
}
