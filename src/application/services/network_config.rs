//! Config emission — write the match-all DHCP file for systemd-networkd.
//!
//! Unconditional and idempotent: the same bytes are written on every run,
//! atomically, regardless of what was captured before.

use anyhow::{Context, Result};

use crate::application::ports::{LocalFs, ProgressReporter};
use crate::domain::render_network_config;
use crate::domain::system::Paths;

/// Overwrite the generated networkd config at its fixed path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn run(fs: &impl LocalFs, paths: &Paths, reporter: &impl ProgressReporter) -> Result<()> {
    fs.write_atomic(&paths.network_config, &render_network_config())
        .with_context(|| format!("writing {}", paths.network_config.display()))?;
    reporter.step(&format!("wrote {}", paths.network_config.display()));
    Ok(())
}
