//! WiFi backend migration — switch wireless association from wpa_supplicant
//! to iwd and connect to the captured network.
//!
//! Runs strictly after config emission, service enablement, and the legacy
//! purge: starting iwd tears down the old wireless link, and doing that
//! earlier would jeopardize package installs that still need the network.
//! The legacy supplicant package is purged only after a successful connect.

use std::time::Instant;

use anyhow::Result;

use crate::application::ports::{
    Clock, PackageManager, ProgressReporter, RefreshStampStore, ServiceManager, WifiStation,
};
use crate::application::services::{ensure, services_enable};
use crate::domain::WifiSelection;
use crate::domain::error::DeviceWaitTimeout;
use crate::domain::system::{IWD_TOOL, IWD_UNIT, Tuning, WPA_SUPPLICANT_PACKAGE, WPA_SUPPLICANT_UNIT};

/// Migrate the selected interface to iwd and associate with the captured
/// network.
///
/// # Errors
///
/// Returns [`DeviceWaitTimeout`] if the device never appears within the
/// configured window (the supplicant package is left installed in that
/// case), or any underlying tool failure.
#[allow(clippy::too_many_arguments)] // one port per collaborator
pub async fn run(
    services: &impl ServiceManager,
    packages: &impl PackageManager,
    station: &impl WifiStation,
    clock: &impl Clock,
    stamp: &impl RefreshStampStore,
    reporter: &impl ProgressReporter,
    tuning: &Tuning,
    selection: &WifiSelection,
) -> Result<()> {
    if services.is_active(WPA_SUPPLICANT_UNIT).await? {
        reporter.step("stopping wpa_supplicant");
        services.stop(WPA_SUPPLICANT_UNIT).await?;
    }

    ensure::ensure_tool(packages, clock, stamp, reporter, &IWD_TOOL).await?;
    services_enable::ensure_unit_up(services, IWD_UNIT, reporter).await?;

    reporter.wait_step(&format!("waiting for iwd to see {}", selection.interface));
    wait_for_device(station, &selection.interface, tuning).await?;

    reporter.step(&format!(
        "connecting {} to '{}'",
        selection.interface, selection.ssid
    ));
    station
        .connect(
            &selection.interface,
            &selection.ssid,
            selection.passphrase.as_deref(),
        )
        .await?;

    reporter.step(&format!("purging {WPA_SUPPLICANT_PACKAGE}"));
    packages.purge(&[WPA_SUPPLICANT_PACKAGE]).await?;
    reporter.success(&format!(
        "{} connected to '{}' via iwd",
        selection.interface, selection.ssid
    ));
    Ok(())
}

/// Poll the backend's device list until `device` appears or the deadline
/// passes. On timeout the current listing is folded into the error so the
/// diagnostic reaches the user before the run aborts.
async fn wait_for_device(
    station: &impl WifiStation,
    device: &str,
    tuning: &Tuning,
) -> Result<()> {
    let started = Instant::now();
    loop {
        if station.device_names().await?.iter().any(|n| n == device) {
            return Ok(());
        }
        if started.elapsed() >= tuning.wifi_wait_timeout {
            let listing = station
                .device_listing()
                .await
                .unwrap_or_else(|_| "(device list unavailable)".to_string());
            return Err(DeviceWaitTimeout {
                device: device.to_string(),
                secs: tuning.wifi_wait_timeout.as_secs(),
                listing,
            }
            .into());
        }
        tokio::time::sleep(tuning.wifi_poll_interval).await;
    }
}
