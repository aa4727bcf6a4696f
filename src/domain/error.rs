//! Typed domain error enums and exit-code mapping.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. The process exit code is decided from the error
//! chain: explicit user cancellation is 255, everything else is 1.

use thiserror::Error;

/// Exit code for any fatal error, including precondition failures.
pub const EXIT_ERROR: i32 = 1;

/// Exit code for explicit user cancellation during an interactive prompt.
/// Never conflated with [`EXIT_ERROR`].
pub const EXIT_CANCELLED: i32 = 255;

// ── Precondition errors ───────────────────────────────────────────────────────

/// Violations detected before any mutating call is made.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("netshift must run as root (try: sudo netshift)")]
    NotRoot,

    #[error("systemd unit '{0}' is not installed; this does not look like a systemd-managed host")]
    UnitMissing(&'static str),
}

// ── Cancellation ──────────────────────────────────────────────────────────────

/// Marker error for an explicit user cancellation (Esc, Ctrl-C, or declining
/// to continue). Detected from the error chain when choosing the exit code.
#[derive(Debug, Error)]
#[error("cancelled by user")]
pub struct Cancelled;

// ── Session detection errors ──────────────────────────────────────────────────

/// Failures of the remote-session probe. The depth cap is an explicit
/// invariant: exceeding it aborts the run rather than silently passing.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("gave up walking process ancestry after {0} parents; refusing to guess")]
    AncestryTooDeep(usize),

    #[error("cannot read process info for pid {pid}: {reason}")]
    ProcUnreadable { pid: u32, reason: String },
}

// ── Bounded-wait timeout ──────────────────────────────────────────────────────

/// The selected wireless device never became visible to iwd. Carries the
/// backend's current device listing so the diagnostic reaches the user.
#[derive(Debug, Error)]
#[error("wifi device '{device}' did not appear in iwd within {secs}s; devices seen:\n{listing}")]
pub struct DeviceWaitTimeout {
    pub device: String,
    pub secs: u64,
    pub listing: String,
}

// ── Exit-code mapping ─────────────────────────────────────────────────────────

/// Map an error to the process exit code. Cancellation anywhere in the chain
/// wins; every other failure is a generic fatal error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.chain().any(|e| e.downcast_ref::<Cancelled>().is_some()) {
        EXIT_CANCELLED
    } else {
        EXIT_ERROR
    }
}
