//! Logging utilities.
//!
//! Driver diagnostics go through the `log` facade; this module only installs
//! a backend for binaries and tests that want one.

mod init;

pub use init::{LoggingConfig, init_logging};
