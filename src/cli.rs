//! CLI argument parsing with clap derive.
//!
//! The tool defines no subcommands or positional arguments — the whole run
//! is interactive or auto-detected. Only ambient output/tuning flags exist.

use anyhow::Result;
use clap::Parser;

use crate::app::AppContext;

/// Migrate a Debian host to systemd-networkd, systemd-resolved, and iwd
#[derive(Parser)]
#[command(name = "netshift", version)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Seconds to wait for the selected wifi device to appear in iwd
    #[arg(long, value_name = "SECS", default_value_t = 120)]
    pub wifi_timeout: u64,
}

impl Cli {
    /// Execute the provisioning run.
    ///
    /// # Errors
    ///
    /// Returns an error when any step fails or the user cancels a prompt.
    pub async fn run(self) -> Result<()> {
        let app = AppContext::new(&self);
        app.provision().await
    }
}
