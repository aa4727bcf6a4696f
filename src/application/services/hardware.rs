//! Hardware probe — read-only classification of kernel network devices.

use anyhow::Result;

use crate::application::ports::{LinkProbe, ProgressReporter};
use crate::domain::HardwareReport;

/// Probe the kernel device list and classify it. No side effects.
///
/// # Errors
///
/// Returns an error if the device list cannot be read.
pub fn run(links: &impl LinkProbe, reporter: &impl ProgressReporter) -> Result<HardwareReport> {
    let report = HardwareReport::from_interfaces(&links.interfaces()?);
    match (report.has_wifi(), report.has_ethernet) {
        (true, true) => reporter.step(&format!(
            "found {} wifi interface(s) and wired ethernet",
            report.wifi_interfaces.len()
        )),
        (true, false) => reporter.step(&format!(
            "found {} wifi interface(s); no wired ethernet",
            report.wifi_interfaces.len()
        )),
        (false, _) => reporter.step("no wifi hardware found"),
    }
    Ok(report)
}
