//! netshift — migrate a Debian host to systemd-networkd, systemd-resolved,
//! and iwd.

use clap::Parser;

use netshift::cli::Cli;
use netshift::domain::error::{EXIT_CANCELLED, exit_code};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        let code = exit_code(&e);
        if code == EXIT_CANCELLED {
            eprintln!("Aborted: {e}");
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(code);
    }
}
