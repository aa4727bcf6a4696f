//! Legacy purge — remove superseded network tooling and its configuration.
//!
//! Must run only after the replacement services are active: purging the live
//! network manager mid-configuration risks losing connectivity with nothing
//! in place to restore it.

use anyhow::{Context, Result};

use crate::application::ports::{LocalFs, PackageManager, ProgressReporter};
use crate::domain::system::{LEGACY_PACKAGES, Paths};

/// Purge the fixed legacy package list and delete their config directories.
///
/// # Errors
///
/// Returns an error if the purge or a directory removal fails.
pub async fn run(
    packages: &impl PackageManager,
    fs: &impl LocalFs,
    paths: &Paths,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.wait_step(&format!("purging {}", LEGACY_PACKAGES.join(", ")));
    packages.purge(&LEGACY_PACKAGES).await?;

    for dir in &paths.legacy_config_dirs {
        if fs
            .remove_dir_all_if_exists(dir)
            .with_context(|| format!("removing {}", dir.display()))?
        {
            reporter.step(&format!("removed {}", dir.display()));
        }
    }
    reporter.success("legacy network tooling removed");
    Ok(())
}
