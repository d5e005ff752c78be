//! Logger setup for binaries built on easel.
//!
//! Library code only talks to the `log` facade; hosts call [`init_logging`]
//! early in `main` to pick an `env_logger` filter.

mod init;

pub use init::{init_logging, LoggingConfig};
