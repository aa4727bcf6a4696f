//! The provisioning orchestrator — an explicit ordered list of named steps,
//! run in sequence, halting on the first failure or cancellation.
//!
//! Ordering constraints baked into [`Step::SEQUENCE`]:
//! preflight before anything mutating; config and service enablement before
//! the legacy purge; everything before the wifi backend switch, which tears
//! down the old wireless link last.

use anyhow::{Context, Result};

use crate::application::ports::{
    Clock, LinkProbe, LocalFs, PackageManager, PrivilegeProbe, ProgressReporter, Prompter,
    RefreshStampStore, ServiceManager, SessionProbe, WifiStation,
};
use crate::application::services::{
    hardware, legacy_purge, network_config, preflight, services_enable, session_guard,
    wifi_capture, wifi_migration,
};
use crate::domain::system::{Paths, Tuning};
use crate::domain::{HardwareReport, WifiSelection};

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Named orchestration steps, in required order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Preflight,
    SessionGuard,
    ProbeHardware,
    CaptureWifi,
    WriteNetworkConfig,
    EnableServices,
    PurgeLegacy,
    MigrateWifi,
}

impl Step {
    /// The full run, in order. The orchestrator iterates this list verbatim.
    pub const SEQUENCE: [Step; 8] = [
        Step::Preflight,
        Step::SessionGuard,
        Step::ProbeHardware,
        Step::CaptureWifi,
        Step::WriteNetworkConfig,
        Step::EnableServices,
        Step::PurgeLegacy,
        Step::MigrateWifi,
    ];

    /// Short label used in progress narration and error context.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Step::Preflight => "checking preconditions",
            Step::SessionGuard => "checking session safety",
            Step::ProbeHardware => "probing network hardware",
            Step::CaptureWifi => "capturing wifi settings",
            Step::WriteNetworkConfig => "writing networkd config",
            Step::EnableServices => "enabling network services",
            Step::PurgeLegacy => "removing legacy tooling",
            Step::MigrateWifi => "migrating wifi to iwd",
        }
    }
}

// ── Port bundle ───────────────────────────────────────────────────────────────

/// Everything the run touches, behind ports. Production wiring lives in
/// `AppContext`; tests substitute scripted doubles for any subset.
pub struct Ports<Priv, Sess, Link, Pkg, Svc, Sta, Pr, Ck, St, Fs, Rep> {
    pub privilege: Priv,
    pub session: Sess,
    pub links: Link,
    pub packages: Pkg,
    pub services: Svc,
    pub station: Sta,
    pub prompter: Pr,
    pub clock: Ck,
    pub stamp: St,
    pub fs: Fs,
    pub reporter: Rep,
}

/// Transient per-run state flowing between steps.
#[derive(Debug, Default)]
struct RunState {
    hardware: HardwareReport,
    wifi: Option<WifiSelection>,
}

impl<Priv, Sess, Link, Pkg, Svc, Sta, Pr, Ck, St, Fs, Rep>
    Ports<Priv, Sess, Link, Pkg, Svc, Sta, Pr, Ck, St, Fs, Rep>
where
    Priv: PrivilegeProbe,
    Sess: SessionProbe,
    Link: LinkProbe,
    Pkg: PackageManager,
    Svc: ServiceManager,
    Sta: WifiStation,
    Pr: Prompter,
    Ck: Clock,
    St: RefreshStampStore,
    Fs: LocalFs,
    Rep: ProgressReporter,
{
    /// Run the whole provisioning sequence.
    ///
    /// # Errors
    ///
    /// Halts on the first failing or cancelled step; the error carries the
    /// step label as context.
    pub async fn run(&self, paths: &Paths, tuning: &Tuning) -> Result<()> {
        let mut state = RunState::default();
        for step in Step::SEQUENCE {
            self.execute(step, &mut state, paths, tuning)
                .await
                .with_context(|| step.describe().to_string())?;
        }
        self.reporter
            .success("network management migrated to systemd-networkd");
        Ok(())
    }

    async fn execute(
        &self,
        step: Step,
        state: &mut RunState,
        paths: &Paths,
        tuning: &Tuning,
    ) -> Result<()> {
        match step {
            Step::Preflight => {
                preflight::run(&self.privilege, &self.services, &self.reporter).await
            }
            Step::SessionGuard => session_guard::run(&self.session, &self.prompter),
            Step::ProbeHardware => {
                state.hardware = hardware::run(&self.links, &self.reporter)?;
                Ok(())
            }
            Step::CaptureWifi => {
                state.wifi = wifi_capture::run(&state.hardware, &self.prompter, &self.reporter)?;
                Ok(())
            }
            Step::WriteNetworkConfig => network_config::run(&self.fs, paths, &self.reporter),
            Step::EnableServices => {
                services_enable::run(
                    &self.services,
                    &self.packages,
                    &self.clock,
                    &self.stamp,
                    &self.reporter,
                )
                .await
            }
            Step::PurgeLegacy => {
                legacy_purge::run(&self.packages, &self.fs, paths, &self.reporter).await
            }
            Step::MigrateWifi => match &state.wifi {
                Some(selection) => {
                    wifi_migration::run(
                        &self.services,
                        &self.packages,
                        &self.station,
                        &self.clock,
                        &self.stamp,
                        &self.reporter,
                        tuning,
                        selection,
                    )
                    .await
                }
                None => Ok(()),
            },
        }
    }
}
