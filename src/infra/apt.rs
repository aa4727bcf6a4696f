//! `AptClient<R>` — routes all apt CLI calls through a `CommandRunner`.
//!
//! Generic over `R: CommandRunner` so tests can inject a mock runner without
//! spawning real processes.

use anyhow::Result;

use crate::application::ports::{CommandRunner, PackageManager};
use crate::infra::command_runner::check_success;

const APT_GET: &str = "apt-get";

pub struct AptClient<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> AptClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PackageManager for AptClient<R> {
    fn command_on_path(&self, exe: &str) -> bool {
        which::which(exe).is_ok()
    }

    async fn refresh_index(&self) -> Result<()> {
        let output = self.runner.run(APT_GET, &["update"]).await?;
        check_success(&output, "apt-get update")
    }

    async fn install(&self, package: &str) -> Result<()> {
        let output = self.runner.run(APT_GET, &["install", "-y", package]).await?;
        check_success(&output, &format!("apt-get install {package}"))
    }

    async fn purge(&self, packages: &[&str]) -> Result<()> {
        let mut args = vec!["purge", "-y", "--autoremove"];
        args.extend_from_slice(packages);
        let output = self.runner.run(APT_GET, &args).await?;
        check_success(&output, "apt-get purge")
    }
}
