//! School seeding.
//!
//! Builds a [`School`] full of fake students. Students that the roster rules
//! reject (a full class, for instance) are counted and skipped.

pub mod models;
pub mod students;

pub use models::SeedConfig;
pub use students::generate_students;

use roster_core::{GradePolicy, RosterResult};
use roster_models::{Class, School, Student};
use std::time::Instant;
use tracing::{debug, info};

/// Result of a seeding run.
#[derive(Debug)]
pub struct SeedOutcome {
    pub school: School,
    pub enrolled: usize,
    pub rejected: usize,
}

/// Seeds a school with `config.num_classes` classes of generated students.
///
/// # Errors
///
/// Fails when the configuration itself is out of range (class code or
/// capacity); rejected students are not errors.
pub fn seed_school(
    name: &str,
    config: &SeedConfig,
    policy: GradePolicy,
) -> RosterResult<SeedOutcome> {
    let start_time = Instant::now();
    info!(classes = config.num_classes, "Seeding school {}", name);

    let mut school = School::new(name);
    let mut enrolled = 0;
    let mut rejected = 0;

    for code in 1..=config.num_classes {
        let modality = config.modality_for(code);
        let mut class = Class::new(code, config.capacity, format!("Class {}", code), modality)?;

        for dto in generate_students(code, modality, config.students_per_class) {
            let result = Student::create_with_policy(dto, policy)
                .and_then(|student| class.enroll(student).map(|_| ()));
            match result {
                Ok(()) => enrolled += 1,
                Err(err) => {
                    debug!(kind = %err.kind(), "Skipped generated student");
                    rejected += 1;
                }
            }
        }

        school.add_class(class)?;
    }

    info!(
        enrolled,
        rejected,
        elapsed = ?start_time.elapsed(),
        "Seeded school"
    );

    Ok(SeedOutcome {
        school,
        enrolled,
        rejected,
    })
}
