//! Logging setup.
//!
//! All crates log through the `log` facade; this module installs the
//! `env_logger` backend once at startup.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
