//! Logging setup.
//!
//! The crate itself only emits through the `log` facade; binaries pick the
//! backend by calling [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
