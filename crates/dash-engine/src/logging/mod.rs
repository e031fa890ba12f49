//! Logger bootstrap.
//!
//! Engine and backends only talk to the `log` facade. The entry point calls
//! [`init_logging`] once to route it to `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
