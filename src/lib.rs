//! # Roster
//!
//! In-memory school roster: students, classes and a school, with enrollment
//! rules and aggregate reports.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: errors and validated value types
//! - [`config`]: environment-driven configuration
//! - [`models`]: students, classes, schools and reports
//! - [`observability`]: console logging setup

pub use roster_config as config;
pub use roster_core as core;
pub use roster_models as models;
pub use roster_observability as observability;

pub use roster_config::RosterConfig;
pub use roster_core::{ErrorKind, GradePolicy, Modality, RosterError, RosterResult};
pub use roster_models::{
    Class, CreateStudentDto, MemorySink, ReportSink, School, SchoolReport, Standing, Student,
    UpdateStudentDto,
};
