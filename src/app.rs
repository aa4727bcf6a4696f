//! Application context — wiring of production infrastructure.
//!
//! `AppContext` is constructed once from the CLI flags and assembles the
//! port bundle the orchestrator runs against. Tests bypass this entirely and
//! build their own bundles from scripted doubles.

use std::time::Duration;

use anyhow::Result;

use crate::application::services::provision::Ports;
use crate::cli::Cli;
use crate::domain::{Paths, Tuning};
use crate::infra::apt::AptClient;
use crate::infra::clock::SystemClock;
use crate::infra::command_runner::{
    DEFAULT_APT_TIMEOUT, DEFAULT_QUERY_TIMEOUT, TokioCommandRunner,
};
use crate::infra::fs::SystemFs;
use crate::infra::iwd::IwdClient;
use crate::infra::prompt::DialoguerPrompter;
use crate::infra::session::{ProcPrivilegeProbe, ProcSessionProbe};
use crate::infra::stamp::FileStampStore;
use crate::infra::sysfs::SysfsLinkProbe;
use crate::infra::systemd::SystemdClient;
use crate::output::{OutputContext, TerminalReporter};

/// Timeout for a single `iwctl station connect` attempt.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(90);

/// Unified application context for one provisioning run.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Fixed filesystem locations.
    pub paths: Paths,
    /// Bounded-wait tuning.
    pub tuning: Tuning,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        let tuning = Tuning {
            wifi_wait_timeout: Duration::from_secs(cli.wifi_timeout),
            ..Tuning::default()
        };
        Self {
            output: OutputContext::new(cli.no_color, cli.quiet),
            paths: Paths::default(),
            tuning,
        }
    }

    /// Wire up production infrastructure and run the full sequence.
    ///
    /// # Errors
    ///
    /// Propagates the first failing or cancelled step.
    pub async fn provision(&self) -> Result<()> {
        let ports = Ports {
            privilege: ProcPrivilegeProbe::new(),
            session: ProcSessionProbe::new(),
            links: SysfsLinkProbe::new(),
            packages: AptClient::new(TokioCommandRunner::new(DEFAULT_APT_TIMEOUT)),
            services: SystemdClient::new(TokioCommandRunner::new(DEFAULT_QUERY_TIMEOUT)),
            station: IwdClient::new(TokioCommandRunner::new(CONNECT_TIMEOUT)),
            prompter: DialoguerPrompter::new(),
            clock: SystemClock,
            stamp: FileStampStore::new(self.paths.refresh_stamp.clone()),
            fs: SystemFs,
            reporter: TerminalReporter::new(&self.output),
        };
        ports.run(&self.paths, &self.tuning).await
    }
}
