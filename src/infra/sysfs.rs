//! `SysfsLinkProbe` — kernel network device enumeration via `/sys/class/net`.
//!
//! Pure read-only queries. A device is wireless when it exposes a `wireless`
//! attribute directory (or a `phy80211` link); the loopback device is
//! skipped.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::LinkProbe;
use crate::domain::NetInterface;

/// ARP hardware type of the loopback device.
const ARPHRD_LOOPBACK: u16 = 772;

pub struct SysfsLinkProbe {
    root: PathBuf,
}

impl SysfsLinkProbe {
    /// Probe the real sysfs tree.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/sys/class/net"))
    }

    /// Probe an alternate tree (used in tests).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Default for SysfsLinkProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkProbe for SysfsLinkProbe {
    fn interfaces(&self) -> Result<Vec<NetInterface>> {
        let mut out = Vec::new();
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("reading {}", self.root.display()))?;
        for entry in entries {
            let entry = entry.context("reading sysfs entry")?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            let device = entry.path();
            let arp_type = std::fs::read_to_string(device.join("type"))
                .ok()
                .and_then(|t| t.trim().parse::<u16>().ok())
                .unwrap_or(0);
            if arp_type == ARPHRD_LOOPBACK {
                continue;
            }
            let wireless =
                device.join("wireless").is_dir() || device.join("phy80211").exists();
            out.push(NetInterface {
                name,
                arp_type,
                wireless,
            });
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}
