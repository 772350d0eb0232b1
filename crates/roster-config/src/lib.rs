//! # Roster Config
//!
//! Configuration loaded from environment variables.
//!
//! - [`roster`]: Grade-list policy and report destination
//!
//! # Example
//!
//! ```ignore
//! use roster_config::RosterConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = RosterConfig::from_env();
//! ```

pub mod roster;

pub use roster::{ReportTarget, RosterConfig};
