//! # Roster Models
//!
//! The in-memory school roster: students, the classes that own them, and the
//! school that owns the classes.
//!
//! # Modules
//!
//! - [`students`]: Student entity, create/update DTOs, averages and standing
//! - [`classes`]: Class roster with capacity, modality and uniqueness rules
//! - [`schools`]: School with class limits and aggregate reporting
//! - [`reports`]: School report and the sinks it is written to
//!
//! # Example
//!
//! ```ignore
//! use roster_models::{Class, CreateStudentDto, MemorySink, School, Student};
//! use roster_core::Modality;
//!
//! let mut class = Class::new(1, 10, "Mathematics", Modality::InPerson)?;
//! class.enroll(Student::create(dto)?)?;
//!
//! let mut school = School::new("Escola Sempre Lógica");
//! school.add_class(class)?;
//!
//! let mut sink = MemorySink::default();
//! let report = school.generate_report(&mut sink);
//! ```

pub mod classes;
pub mod reports;
pub mod schools;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use classes::Class;
pub use reports::{MemorySink, ReportSink, SchoolReport, StdoutSink, TracingSink};
pub use schools::{MAX_CLASSES, School};
pub use students::{
    CreateStudentDto, MIN_AGE, PASSING_AVERAGE, Standing, Student, UpdateStudentDto,
};
