//! Port trait definitions for the application layer.
//!
//! Ports are the contracts infrastructure must fulfill. This file imports
//! only from `crate::domain` — never from `crate::infra` or `crate::output`.
//! Every external collaborator the orchestrator touches (package manager,
//! service manager, wifi backend, prompt tool, kernel device attributes,
//! clock, stamp file) sits behind one of these traits so the whole flow can
//! be driven by scripted test doubles.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::domain::NetInterface;

// ── Command execution ─────────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output, using the runner's default
    /// timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds
    /// `timeout`. On timeout, the child process must be killed, not left
    /// orphaned.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Package management ────────────────────────────────────────────────────────

/// The host package manager, consumed as an opaque service.
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// Whether an executable is already available on the search path.
    fn command_on_path(&self, exe: &str) -> bool;

    /// Refresh the package index.
    async fn refresh_index(&self) -> Result<()>;

    /// Install a single package by name. Idempotent at the tool level:
    /// installing an already-installed package succeeds.
    async fn install(&self, package: &str) -> Result<()>;

    /// Purge packages and their configuration. Absent packages are a no-op.
    async fn purge(&self, packages: &[&str]) -> Result<()>;
}

// ── Service management ────────────────────────────────────────────────────────

/// The host service manager (systemd), consumed as an opaque service.
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    /// Whether the unit file is installed at all (queryable by name).
    async fn unit_installed(&self, unit: &str) -> Result<bool>;

    /// Whether the unit is currently active.
    async fn is_active(&self, unit: &str) -> Result<bool>;

    /// Whether the unit is enabled to start at boot.
    async fn is_enabled(&self, unit: &str) -> Result<bool>;

    /// Enable the unit and start it now.
    async fn enable_now(&self, unit: &str) -> Result<()>;

    /// Stop the unit.
    async fn stop(&self, unit: &str) -> Result<()>;
}

// ── WiFi backend ──────────────────────────────────────────────────────────────

/// The replacement wireless daemon's control surface (iwd's `iwctl`).
#[allow(async_fn_in_trait)]
pub trait WifiStation {
    /// Names of the devices the daemon currently manages.
    async fn device_names(&self) -> Result<Vec<String>>;

    /// The raw device listing, for diagnostics when a device never appears.
    async fn device_listing(&self) -> Result<String>;

    /// Associate `device` with `ssid`. `passphrase` is `None` for an open
    /// network.
    async fn connect(&self, device: &str, ssid: &str, passphrase: Option<&str>) -> Result<()>;
}

// ── Interactive prompting ─────────────────────────────────────────────────────

/// Interaction provider. Any method may fail with `domain::Cancelled` in its
/// error chain when the user backs out; callers must not conflate that with
/// an ordinary error.
pub trait Prompter {
    /// Show a prominent blocking notice.
    fn notice(&self, title: &str, body: &str) -> Result<()>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Read one non-empty line of free text.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Read masked input. May be empty.
    fn secret(&self, prompt: &str) -> Result<String>;

    /// Pick one entry from `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;
}

// ── Clock and persisted stamp ─────────────────────────────────────────────────

/// Injected wall clock, so the refresh throttle is deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Persisted instant of the last package-index refresh.
pub trait RefreshStampStore {
    /// `None` when no refresh has been recorded (or the stamp is unreadable).
    fn load(&self) -> Result<Option<DateTime<Utc>>>;

    fn save(&self, at: DateTime<Utc>) -> Result<()>;
}

// ── Host probes ───────────────────────────────────────────────────────────────

/// Read-only enumeration of kernel network devices.
pub trait LinkProbe {
    fn interfaces(&self) -> Result<Vec<NetInterface>>;
}

/// Capability: determine whether this run is attached to a remote session
/// that is not wrapped in a terminal multiplexer.
pub trait SessionProbe {
    /// `Ok(true)` means hazardous: remote and unwrapped. Errors mean the
    /// probe could not decide (e.g. ancestry depth cap exceeded) — callers
    /// must treat that as fatal, never as "not remote".
    fn remote_unmultiplexed(&self) -> Result<bool>;
}

/// Whether the process runs with elevated privilege.
pub trait PrivilegeProbe {
    fn is_root(&self) -> Result<bool>;
}

// ── Local filesystem ──────────────────────────────────────────────────────────

/// Abstracts the filesystem writes/deletes under system configuration paths.
pub trait LocalFs {
    /// Write `contents` to `path` atomically (temp file + rename), creating
    /// parent directories as needed. Overwrites any existing file.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()>;

    /// Recursively delete a directory. Returns `false` if it did not exist.
    fn remove_dir_all_if_exists(&self, path: &Path) -> Result<bool>;
}

// ── Progress reporting ────────────────────────────────────────────────────────

/// Abstracts progress reporting so services can narrate without depending on
/// the presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit a step message for a potentially long, non-interactive wait.
    /// Renderers may show a live indicator; must never be called while an
    /// interactive prompt could be pending.
    fn wait_step(&self, message: &str) {
        self.step(message);
    }
}
