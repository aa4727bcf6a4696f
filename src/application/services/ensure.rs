//! Dependency ensure — install a package when its executable is missing,
//! refreshing the apt index at most once per rolling 24-hour window.
//!
//! The throttle reads an injected clock and stamp store so the window is
//! deterministic under test.

use anyhow::Result;
use chrono::Duration;

use crate::application::ports::{Clock, PackageManager, ProgressReporter, RefreshStampStore};
use crate::domain::system::{REFRESH_WINDOW_HOURS, Tool};

/// Make sure `tool.exe` is usable, installing `tool.package` if not.
/// No-op when the executable is already on the search path.
///
/// # Errors
///
/// Returns an error if the index refresh or the install fails.
pub async fn ensure_tool(
    packages: &impl PackageManager,
    clock: &impl Clock,
    stamp: &impl RefreshStampStore,
    reporter: &impl ProgressReporter,
    tool: &Tool,
) -> Result<()> {
    if packages.command_on_path(tool.exe) {
        return Ok(());
    }
    install_package(packages, clock, stamp, reporter, tool.package).await
}

/// Install a package unconditionally, refreshing the index first when the
/// stamp is older than the window (or absent).
///
/// # Errors
///
/// Returns an error if the index refresh or the install fails.
pub async fn install_package(
    packages: &impl PackageManager,
    clock: &impl Clock,
    stamp: &impl RefreshStampStore,
    reporter: &impl ProgressReporter,
    package: &str,
) -> Result<()> {
    maybe_refresh_index(packages, clock, stamp, reporter).await?;
    reporter.wait_step(&format!("installing {package}"));
    packages.install(package).await
}

/// Refresh the package index unless it was refreshed within the window.
/// A stamp in the future (clock stepped backwards) counts as stale.
async fn maybe_refresh_index(
    packages: &impl PackageManager,
    clock: &impl Clock,
    stamp: &impl RefreshStampStore,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let now = clock.now();
    let fresh = stamp.load()?.is_some_and(|last| {
        last <= now && now.signed_duration_since(last) < Duration::hours(REFRESH_WINDOW_HOURS)
    });
    if fresh {
        return Ok(());
    }
    reporter.wait_step("refreshing package index");
    packages.refresh_index().await?;
    stamp.save(now)?;
    Ok(())
}
