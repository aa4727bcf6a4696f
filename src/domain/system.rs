//! Catalog of the system artifacts this tool manages: unit names, package
//! names, fixed filesystem paths, and run tuning knobs.

use std::path::PathBuf;
use std::time::Duration;

// ── systemd units ─────────────────────────────────────────────────────────────

/// Primary networking service taking over interface/IP configuration.
pub const NETWORKD_UNIT: &str = "systemd-networkd.service";

/// DNS-resolution service. Enabled strictly after networkd: once active it
/// owns system-wide name resolution, so it must be the last network-affecting
/// step before cleanup.
pub const RESOLVED_UNIT: &str = "systemd-resolved.service";

/// Replacement wireless daemon.
pub const IWD_UNIT: &str = "iwd.service";

/// Legacy wireless supplicant being replaced.
pub const WPA_SUPPLICANT_UNIT: &str = "wpa_supplicant.service";

// ── packages ──────────────────────────────────────────────────────────────────

/// Debian package name of the legacy supplicant.
pub const WPA_SUPPLICANT_PACKAGE: &str = "wpasupplicant";

/// Superseded network tooling, purged after the replacement services are up:
/// legacy interface manager, legacy DHCP client, legacy resolver config
/// manager, declarative config generator, desktop network manager.
pub const LEGACY_PACKAGES: [&str; 5] = [
    "ifupdown",
    "isc-dhcp-client",
    "resolvconf",
    "netplan.io",
    "network-manager",
];

/// An executable and the package that provides it, for dependency-ensure.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub exe: &'static str,
    pub package: &'static str,
}

/// systemd-resolved ships as its own package on Debian 12+.
pub const RESOLVED_TOOL: Tool = Tool {
    exe: "resolvectl",
    package: "systemd-resolved",
};

pub const IWD_TOOL: Tool = Tool {
    exe: "iwctl",
    package: "iwd",
};

// ── fixed paths ───────────────────────────────────────────────────────────────

/// Fixed filesystem locations the run reads or writes. Overridable so tests
/// can redirect everything under a temp directory.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Generated networkd config, overwritten wholesale on every run.
    pub network_config: PathBuf,
    /// Epoch-seconds stamp of the last apt index refresh.
    pub refresh_stamp: PathBuf,
    /// Config directories of superseded tooling, deleted recursively.
    pub legacy_config_dirs: Vec<PathBuf>,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            network_config: PathBuf::from("/etc/systemd/network/90-dhcp.network"),
            refresh_stamp: PathBuf::from("/run/netshift/apt-refresh"),
            legacy_config_dirs: vec![
                PathBuf::from("/etc/netplan"),
                PathBuf::from("/etc/NetworkManager"),
            ],
        }
    }
}

// ── tuning ────────────────────────────────────────────────────────────────────

/// Bounded-wait tuning for the wifi backend switchover.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Wall-clock deadline for the selected device to appear in iwd.
    pub wifi_wait_timeout: Duration,
    /// Sleep between device-list polls.
    pub wifi_poll_interval: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            wifi_wait_timeout: Duration::from_secs(120),
            wifi_poll_interval: Duration::from_secs(2),
        }
    }
}

/// Minimum age of the refresh stamp before the apt index is refreshed again.
pub const REFRESH_WINDOW_HOURS: i64 = 24;
