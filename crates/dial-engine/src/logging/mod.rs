//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade; the backend (`env_logger`) is chosen here.

mod init;

pub use init::{LoggingConfig, init_logging};
