//! Session guard — warn before reconfiguring networking over a bare remote
//! session.
//!
//! Tearing down the old network stack can drop an SSH connection; a terminal
//! multiplexer keeps the run alive on the host. Policy: show the notice and
//! ask whether to continue (declining is user cancellation, exit 255), rather
//! than hard-aborting.

use anyhow::Result;

use crate::application::ports::{Prompter, SessionProbe};
use crate::domain::Cancelled;

const NOTICE_TITLE: &str = "Remote session without a terminal multiplexer";

const NOTICE_BODY: &str = "This run replaces the network stack and may drop your SSH connection \
mid-way, killing the run with it. Re-attach protection (tmux, screen, or zellij) is strongly \
recommended. If the connection drops anyway, the run is safe to re-invoke.";

/// Check the session and, when hazardous, ask the user whether to continue.
///
/// # Errors
///
/// Returns [`Cancelled`] when the user declines; propagates probe failures
/// (including the ancestry depth cap) as fatal errors.
pub fn run(session: &impl SessionProbe, prompter: &impl Prompter) -> Result<()> {
    if !session.remote_unmultiplexed()? {
        return Ok(());
    }
    prompter.notice(NOTICE_TITLE, NOTICE_BODY)?;
    if prompter.confirm("Continue without a multiplexer?", false)? {
        Ok(())
    } else {
        Err(Cancelled.into())
    }
}
