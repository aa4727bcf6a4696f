//! `DialoguerPrompter` — terminal implementation of the `Prompter` port.
//!
//! Esc on a menu/confirm and Ctrl-C on a text prompt both surface as
//! `domain::Cancelled`, so the orchestrator can map them to the distinct
//! cancellation exit code.

use std::io::ErrorKind;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Password, Select};

use crate::application::ports::Prompter;
use crate::domain::Cancelled;

pub struct DialoguerPrompter;

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// An interrupted terminal read is user cancellation; anything else is a
/// real prompt failure.
fn map_err(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => Cancelled.into(),
        other => anyhow::Error::new(other),
    }
}

impl Prompter for DialoguerPrompter {
    fn notice(&self, title: &str, body: &str) -> Result<()> {
        println!();
        println!("  {}", style(title).yellow().bold());
        println!();
        for line in textwrap(body, 72) {
            println!("  {line}");
        }
        println!();
        Ok(())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(map_err)?
            .ok_or_else(|| anyhow::Error::new(Cancelled))
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(false)
            .interact_text()
            .map_err(map_err)
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(map_err)
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(map_err)?
            .ok_or_else(|| anyhow::Error::new(Cancelled))
    }
}

/// Greedy word wrap for the notice body. No hyphenation; long words overflow.
fn textwrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
