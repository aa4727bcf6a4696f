//! `SystemdClient<R>` — routes all systemctl calls through a `CommandRunner`.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ServiceManager};
use crate::infra::command_runner::check_success;

const SYSTEMCTL: &str = "systemctl";

pub struct SystemdClient<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SystemdClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ServiceManager for SystemdClient<R> {
    async fn unit_installed(&self, unit: &str) -> Result<bool> {
        // `systemctl cat` exits non-zero when no unit file exists by that name.
        let output = self.runner.run(SYSTEMCTL, &["cat", "--", unit]).await?;
        Ok(output.status.success())
    }

    async fn is_active(&self, unit: &str) -> Result<bool> {
        let output = self
            .runner
            .run(SYSTEMCTL, &["is-active", "--quiet", "--", unit])
            .await?;
        Ok(output.status.success())
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        let output = self
            .runner
            .run(SYSTEMCTL, &["is-enabled", "--quiet", "--", unit])
            .await?;
        Ok(output.status.success())
    }

    async fn enable_now(&self, unit: &str) -> Result<()> {
        let output = self
            .runner
            .run(SYSTEMCTL, &["enable", "--now", "--", unit])
            .await?;
        check_success(&output, &format!("systemctl enable --now {unit}"))
    }

    async fn stop(&self, unit: &str) -> Result<()> {
        let output = self.runner.run(SYSTEMCTL, &["stop", "--", unit]).await?;
        check_success(&output, &format!("systemctl stop {unit}"))
    }
}
