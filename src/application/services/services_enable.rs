//! Service enablement — bring up systemd-networkd, then systemd-resolved.
//!
//! Ordering invariant: resolved is enabled strictly after networkd, and is
//! the last network-affecting action before cleanup. Once resolved is active
//! it owns system-wide name resolution, after which package installs that
//! need DNS may fail — so any install it requires happens first.

use anyhow::Result;

use crate::application::ports::{
    Clock, PackageManager, ProgressReporter, RefreshStampStore, ServiceManager,
};
use crate::application::services::ensure;
use crate::domain::system::{NETWORKD_UNIT, RESOLVED_TOOL, RESOLVED_UNIT};

/// Enable-and-start the networking and resolution services, installing the
/// resolved package first when its unit is absent.
///
/// # Errors
///
/// Returns an error if any query, install, or enable fails.
pub async fn run(
    services: &impl ServiceManager,
    packages: &impl PackageManager,
    clock: &impl Clock,
    stamp: &impl RefreshStampStore,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    ensure_unit_up(services, NETWORKD_UNIT, reporter).await?;

    if !services.unit_installed(RESOLVED_UNIT).await? {
        ensure::install_package(packages, clock, stamp, reporter, RESOLVED_TOOL.package).await?;
    }
    ensure_unit_up(services, RESOLVED_UNIT, reporter).await?;
    Ok(())
}

/// Enable-and-start a unit unless it is already both active and enabled.
pub(crate) async fn ensure_unit_up(
    services: &impl ServiceManager,
    unit: &str,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    if services.is_active(unit).await? && services.is_enabled(unit).await? {
        reporter.step(&format!("{unit} already active and enabled"));
        return Ok(());
    }
    reporter.step(&format!("enabling {unit}"));
    services.enable_now(unit).await
}
