//! `IwdClient<R>` — drives iwd through its `iwctl` CLI.
//!
//! `iwctl` decorates its table output with ANSI color codes even when piped,
//! so listings are stripped before parsing.

use anyhow::{Context, Result};
use regex::Regex;

use crate::application::ports::{CommandRunner, WifiStation};
use crate::infra::command_runner::check_success;

const IWCTL: &str = "iwctl";

pub struct IwdClient<R: CommandRunner> {
    runner: R,
    ansi: Regex,
}

impl<R: CommandRunner> IwdClient<R> {
    /// # Panics
    ///
    /// Panics if the ANSI pattern is invalid (it is a compile-time constant
    /// and will not panic).
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            ansi: Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid regex"),
        }
    }

    fn strip_ansi(&self, text: &str) -> String {
        self.ansi.replace_all(text, "").into_owned()
    }
}

impl<R: CommandRunner> WifiStation for IwdClient<R> {
    async fn device_names(&self) -> Result<Vec<String>> {
        Ok(parse_device_names(&self.device_listing().await?))
    }

    async fn device_listing(&self) -> Result<String> {
        let output = self.runner.run(IWCTL, &["device", "list"]).await?;
        check_success(&output, "iwctl device list")?;
        Ok(self.strip_ansi(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn connect(&self, device: &str, ssid: &str, passphrase: Option<&str>) -> Result<()> {
        let args: Vec<&str> = match passphrase {
            Some(pw) => vec!["--passphrase", pw, "station", device, "connect", ssid],
            None => vec!["station", device, "connect", ssid],
        };
        let output = self
            .runner
            .run(IWCTL, &args)
            .await
            .with_context(|| format!("connecting {device} to '{ssid}'"))?;
        check_success(&output, &format!("iwctl station {device} connect"))
    }
}

/// Pull device names out of an (ANSI-stripped) `iwctl device list` table:
/// skip the banner, the column header, and ruler lines; the first token of
/// each remaining row is the device name.
fn parse_device_names(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('-'))
        .filter(|line| *line != "Devices")
        .filter(|line| !(line.starts_with("Name") && line.contains("Address")))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_owned)
        .collect()
}
