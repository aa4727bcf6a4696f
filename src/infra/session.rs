//! Procfs-based probes: remote-session detection and effective-UID lookup.
//!
//! Remote detection prefers the session environment markers and falls back
//! to walking the process ancestry for an sshd parent. The walk is bounded:
//! exceeding [`ANCESTRY_CAP`] parents is a fatal error, never a silent
//! "not remote". Reading uid from `/proc/self/status` keeps the crate free
//! of unsafe libc calls.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{PrivilegeProbe, SessionProbe};
use crate::domain::error::SessionError;

/// Upper bound on the ancestry walk. A deeper chain means the process tree
/// is not what this tool assumes, and guessing would be worse than failing.
pub const ANCESTRY_CAP: usize = 50;

const REMOTE_MARKERS: [&str; 3] = ["SSH_CONNECTION", "SSH_CLIENT", "SSH_TTY"];
const MULTIPLEXER_MARKERS: [&str; 3] = ["TMUX", "STY", "ZELLIJ"];

/// Session environment markers, captured once per probe so classification is
/// a pure function of this snapshot plus the process tree.
#[derive(Debug, Clone, Copy)]
pub struct SessionEnv {
    /// An SSH marker variable is set.
    pub remote_marker: bool,
    /// A multiplexer marker variable (tmux/screen/zellij) is set.
    pub multiplexer_marker: bool,
}

impl SessionEnv {
    #[must_use]
    pub fn capture() -> Self {
        Self {
            remote_marker: any_env_set(&REMOTE_MARKERS),
            multiplexer_marker: any_env_set(&MULTIPLEXER_MARKERS),
        }
    }
}

// ── Session probe ─────────────────────────────────────────────────────────────

pub struct ProcSessionProbe {
    proc_root: PathBuf,
    start_pid: u32,
}

impl ProcSessionProbe {
    /// Probe the real process tree, starting from this process.
    #[must_use]
    pub fn new() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
            start_pid: std::process::id(),
        }
    }

    /// Probe an alternate tree from an explicit pid (used in tests).
    #[must_use]
    pub fn with_root(proc_root: PathBuf, start_pid: u32) -> Self {
        Self {
            proc_root,
            start_pid,
        }
    }

    /// Walk parent links looking for an sshd ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AncestryTooDeep`] when the cap is exceeded,
    /// or [`SessionError::ProcUnreadable`] when a stat file cannot be parsed.
    pub fn has_sshd_ancestor(&self) -> Result<bool> {
        let mut pid = self.start_pid;
        for _ in 0..ANCESTRY_CAP {
            let (comm, ppid) = self.read_stat(pid)?;
            if comm.starts_with("sshd") {
                return Ok(true);
            }
            if ppid <= 1 {
                return Ok(false);
            }
            pid = ppid;
        }
        Err(SessionError::AncestryTooDeep(ANCESTRY_CAP).into())
    }

    /// Parse `(comm, ppid)` from `/proc/<pid>/stat`. The comm field is
    /// parenthesized and may itself contain spaces or parens, so it is
    /// delimited by the *last* closing paren.
    fn read_stat(&self, pid: u32) -> Result<(String, u32)> {
        let path = self.proc_root.join(pid.to_string()).join("stat");
        let text = std::fs::read_to_string(&path).map_err(|e| SessionError::ProcUnreadable {
            pid,
            reason: e.to_string(),
        })?;
        parse_stat(&text).ok_or_else(|| {
            SessionError::ProcUnreadable {
                pid,
                reason: "malformed stat line".to_string(),
            }
            .into()
        })
    }

    /// Classify a session given captured environment markers. The ancestry
    /// walk runs only when no environment marker already says "remote".
    ///
    /// # Errors
    ///
    /// Propagates ancestry-walk failures.
    pub fn classify(&self, env: SessionEnv) -> Result<bool> {
        let remote = env.remote_marker || self.has_sshd_ancestor()?;
        if !remote {
            return Ok(false);
        }
        Ok(!env.multiplexer_marker)
    }
}

impl Default for ProcSessionProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_stat(text: &str) -> Option<(String, u32)> {
    let open = text.find('(')?;
    let close = text.rfind(')')?;
    let comm = text.get(open + 1..close)?.to_string();
    // Fields after the comm: state ppid ...
    let ppid = text.get(close + 1..)?.split_whitespace().nth(1)?.parse().ok()?;
    Some((comm, ppid))
}

fn any_env_set(names: &[&str]) -> bool {
    names.iter().any(|n| std::env::var_os(n).is_some())
}

impl SessionProbe for ProcSessionProbe {
    fn remote_unmultiplexed(&self) -> Result<bool> {
        self.classify(SessionEnv::capture())
    }
}

// ── Privilege probe ───────────────────────────────────────────────────────────

pub struct ProcPrivilegeProbe {
    status_path: PathBuf,
}

impl ProcPrivilegeProbe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status_path: PathBuf::from("/proc/self/status"),
        }
    }

    #[must_use]
    pub fn with_status_path(status_path: PathBuf) -> Self {
        Self { status_path }
    }
}

impl Default for ProcPrivilegeProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegeProbe for ProcPrivilegeProbe {
    fn is_root(&self) -> Result<bool> {
        let text = std::fs::read_to_string(&self.status_path)
            .with_context(|| format!("reading {}", self.status_path.display()))?;
        let euid = effective_uid(&text)
            .with_context(|| format!("no Uid line in {}", self.status_path.display()))?;
        Ok(euid == 0)
    }
}

/// The `Uid:` line carries real, effective, saved, and filesystem uids.
fn effective_uid(status: &str) -> Option<u32> {
    status
        .lines()
        .find(|l| l.starts_with("Uid:"))?
        .split_whitespace()
        .nth(2)?
        .parse()
        .ok()
}
