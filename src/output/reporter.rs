//! `TerminalReporter` — presentation-layer implementation of
//! `ProgressReporter`.
//!
//! Ordinary steps print plain lines styled through the `OutputContext`
//! stylesheet (so `--no-color` holds). `wait_step` runs an indicatif
//! spinner, finished in place by the next report; it is only ever used for
//! non-interactive phases, so it cannot overdraw a prompt.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: RefCell::new(None),
        }
    }

    fn finish_active(&self) {
        if let Some(pb) = self.active.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.finish_active();
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.finish_active();
        if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.header));
        }
    }

    fn success(&self, message: &str) {
        if let Some(pb) = self.active.borrow_mut().take() {
            progress::finish_ok(&pb, message);
            return;
        }
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".style(self.ctx.styles.success));
        }
    }

    fn warn(&self, message: &str) {
        // Route around an active spinner so the line is not overdrawn.
        let line = format!("  {} {message}", "!".style(self.ctx.styles.warning));
        if let Some(pb) = self.active.borrow().as_ref() {
            pb.println(line);
            return;
        }
        if !self.ctx.quiet {
            println!("{line}");
        }
    }

    fn wait_step(&self, message: &str) {
        self.finish_active();
        if self.ctx.show_progress() {
            *self.active.borrow_mut() = Some(progress::spinner(message));
        } else if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.header));
        }
    }
}
