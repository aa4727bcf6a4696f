//! Interactive capture of wireless settings.
//!
//! Policy (ethernet-aware variant): when wireless hardware exists and no
//! wired ethernet does, WiFi is the only possible uplink and configuration
//! starts without asking; otherwise a yes/no prompt decides. One wireless
//! interface selects itself; two or more present a menu labelled with
//! ordinals. Any cancellation aborts the whole run.

use anyhow::Result;

use crate::application::ports::{ProgressReporter, Prompter};
use crate::domain::{HardwareReport, WifiSelection};

/// Capture a [`WifiSelection`], or `None` when there is no wireless hardware
/// or the user opts out.
///
/// # Errors
///
/// Returns `domain::Cancelled` (via the prompter) when the user backs out of
/// any prompt.
pub fn run(
    hardware: &HardwareReport,
    prompter: &impl Prompter,
    reporter: &impl ProgressReporter,
) -> Result<Option<WifiSelection>> {
    if !hardware.has_wifi() {
        return Ok(None);
    }

    let configure = if hardware.has_ethernet {
        prompter.confirm("Configure WiFi now?", true)?
    } else {
        // Sole uplink: asking would only offer a way to brick connectivity.
        reporter.step("no wired ethernet; configuring wifi");
        true
    };
    if !configure {
        return Ok(None);
    }

    let interface = select_interface(&hardware.wifi_interfaces, prompter)?;
    let ssid = prompter.input("Network name (SSID)")?.trim().to_string();
    let passphrase = prompter.secret("Passphrase (leave empty for an open network)")?;

    Ok(Some(WifiSelection {
        interface,
        ssid,
        passphrase: if passphrase.is_empty() {
            None
        } else {
            Some(passphrase)
        },
    }))
}

/// A single interface selects itself; more than one goes through a menu.
fn select_interface(interfaces: &[String], prompter: &impl Prompter) -> Result<String> {
    if let [only] = interfaces {
        return Ok(only.clone());
    }
    let items: Vec<String> = interfaces
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}: {name}", i + 1))
        .collect();
    let index = prompter.select("Select the WiFi interface to configure", &items)?;
    Ok(interfaces[index].clone())
}
