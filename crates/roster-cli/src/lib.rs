//! # Roster CLI
//!
//! Fake-data seeding for trying out the roster from the command line.
//!
//! ## Usage
//!
//! ```ignore
//! use roster_cli::seeder::{SeedConfig, seed_school};
//!
//! let config = SeedConfig::new(3).with_students_per_class(8);
//! let outcome = seed_school("Escola", &config, GradePolicy::Reject)?;
//! ```

pub mod seeder;
