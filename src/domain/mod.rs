//! Domain layer — pure types and logic, no I/O.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. Everything here is synchronous and
//! takes data in, returning data out.

pub mod error;
pub mod network;
pub mod system;

pub use error::{Cancelled, PreconditionError, exit_code};
pub use network::{HardwareReport, NetInterface, WifiSelection, render_network_config};
pub use system::{Paths, Tuning};
