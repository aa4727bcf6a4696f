//! Preflight — privilege and init-system checks.
//!
//! Runs before any mutating call. Privilege is confirmed first; only then is
//! the service manager queried at all.

use anyhow::Result;

use crate::application::ports::{PrivilegeProbe, ProgressReporter, ServiceManager};
use crate::domain::error::PreconditionError;
use crate::domain::system::NETWORKD_UNIT;

/// Fail fast unless running as root on a host where the target networking
/// unit is installed.
///
/// # Errors
///
/// Returns [`PreconditionError`] on either violation.
pub async fn run(
    privilege: &impl PrivilegeProbe,
    services: &impl ServiceManager,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    if !privilege.is_root()? {
        return Err(PreconditionError::NotRoot.into());
    }
    if !services.unit_installed(NETWORKD_UNIT).await? {
        return Err(PreconditionError::UnitMissing(NETWORKD_UNIT).into());
    }
    reporter.step("running as root on a systemd host");
    Ok(())
}
