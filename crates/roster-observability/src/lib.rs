//! Roster Observability
//!
//! Console logging for the roster binaries. Library crates only emit
//! `tracing` events; installing a subscriber is the binary's job.
//!
//! # Examples
//!
//! ```no_run
//! use roster_observability::init_basic_console_logging;
//!
//! init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, build_env_filter, init_basic_console_logging};
