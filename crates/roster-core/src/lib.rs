//! # Roster Core
//!
//! Core types, errors, and value types shared by the roster crates.
//!
//! - [`errors`]: The roster error type and its kinds
//! - [`value_types`]: Validated primitives (email, class code, capacity, modality)
//! - [`policy`]: Handling of oversized grade lists
//! - [`validation`]: Conversion of `validator` failures into roster errors
//!
//! # Example
//!
//! ```ignore
//! use roster_core::{ClassCode, Email, RosterError};
//!
//! let code = ClassCode::new(3)?;
//! let email: Email = "ana@example.com".parse()?;
//! let err = RosterError::not_found(format!("no student with email {email}"));
//! ```

pub mod errors;
pub mod policy;
pub mod validation;
pub mod value_types;

// Re-export commonly used types at crate root
pub use errors::{ErrorKind, RosterError, RosterResult};
pub use policy::GradePolicy;
pub use value_types::{Capacity, ClassCode, Email, Modality};
