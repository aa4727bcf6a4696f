//! Network interface classification and the generated networkd config.

use std::fmt;

/// ARP hardware type for ethernet-class links (wired and wireless).
const ARPHRD_ETHER: u16 = 1;

/// One entry from the kernel's network device list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    /// Interface name, e.g. `wlan0`.
    pub name: String,
    /// ARP hardware type from the device's `type` attribute.
    pub arp_type: u16,
    /// Whether the device exposes wireless attributes.
    pub wireless: bool,
}

impl NetInterface {
    /// A wired ethernet link: ethernet hardware type without wireless
    /// attributes. Wireless devices also report `ARPHRD_ETHER`, so the
    /// wireless flag is the discriminator.
    #[must_use]
    pub fn is_wired_ethernet(&self) -> bool {
        self.arp_type == ARPHRD_ETHER && !self.wireless
    }
}

/// What the hardware probe found. Assembled once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct HardwareReport {
    /// Names of wireless-capable interfaces, sorted.
    pub wifi_interfaces: Vec<String>,
    /// Whether at least one wired ethernet-class interface exists.
    pub has_ethernet: bool,
}

impl HardwareReport {
    /// Classify a probed interface list.
    #[must_use]
    pub fn from_interfaces(interfaces: &[NetInterface]) -> Self {
        let mut wifi_interfaces: Vec<String> = interfaces
            .iter()
            .filter(|i| i.wireless)
            .map(|i| i.name.clone())
            .collect();
        wifi_interfaces.sort();
        Self {
            has_ethernet: interfaces.iter().any(NetInterface::is_wired_ethernet),
            wifi_interfaces,
        }
    }

    #[must_use]
    pub fn has_wifi(&self) -> bool {
        !self.wifi_interfaces.is_empty()
    }
}

/// User-supplied wireless settings, captured interactively and consumed once
/// by the backend migration. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct WifiSelection {
    /// Chosen interface name.
    pub interface: String,
    /// Network name.
    pub ssid: String,
    /// `None` for an open network.
    pub passphrase: Option<String>,
}

// Manual Debug: the passphrase must not leak into logs or test output.
impl fmt::Debug for WifiSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiSelection")
            .field("interface", &self.interface)
            .field("ssid", &self.ssid)
            .field(
                "passphrase",
                &self.passphrase.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Render the match-all DHCP config for systemd-networkd. Fixed content:
/// every run writes the same bytes, so the emission step is idempotent by
/// construction.
#[must_use]
pub fn render_network_config() -> String {
    "# Written by netshift. Hand edits will be overwritten on the next run.\n\
     [Match]\n\
     Type=ether wlan\n\
     \n\
     [Network]\n\
     DHCP=yes\n"
        .to_string()
}
