//! Student seeding functionality.
//!
//! Generates fake student data in parallel. Generation never fails; the
//! roster rules are applied when the students are created and enrolled.

use chrono::{Datelike, Days, Local, NaiveDate};
use fake::Fake;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use roster_core::Modality;
use roster_models::CreateStudentDto;

/// Generates `count` students for one class using Rayon.
///
/// Emails embed the class code and index, so they are unique per school.
pub fn generate_students(class_code: u8, modality: Modality, count: usize) -> Vec<CreateStudentDto> {
    let today = Local::now().date_naive();

    (0..count)
        .into_par_iter()
        .map(|i| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let provider: String = FreeEmailProvider().fake();
            let years: i32 = (16..30).fake();
            let days: u64 = (0..300).fake();
            let grade_count: usize = (0..=5).fake();

            CreateStudentDto {
                email: format!(
                    "{}.{}.c{}n{}@{}",
                    local_part(&first_name),
                    local_part(&last_name),
                    class_code,
                    i,
                    provider
                ),
                first_name,
                last_name,
                modality,
                class_code,
                birth_date: birth_date(today, years, days),
                grades: Some(
                    (0..grade_count)
                        .map(|_| f64::from((0..=10u8).fake::<u8>()))
                        .collect(),
                ),
            }
        })
        .collect()
}

fn local_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

/// A date at least `years` full years before `today`.
fn birth_date(today: NaiveDate, years: i32, days: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - years, today.month(), 1)
        .and_then(|d| d.checked_sub_days(Days::new(days)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_students_shape() {
        let students = generate_students(4, Modality::Remote, 20);
        assert_eq!(students.len(), 20);
        for s in &students {
            assert_eq!(s.class_code, 4);
            assert_eq!(s.modality, Modality::Remote);
            assert!(s.grades.as_ref().map_or(0, Vec::len) <= 5);
        }
    }

    #[test]
    fn test_generated_emails_unique() {
        let students = generate_students(1, Modality::InPerson, 50);
        let emails: HashSet<_> = students.iter().map(|s| s.email.clone()).collect();
        assert_eq!(emails.len(), 50);
    }

    #[test]
    fn test_birth_date_is_old_enough() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        let born = birth_date(today, 16, 0);
        assert_eq!(born, NaiveDate::from_ymd_opt(2010, 3, 1).unwrap());
        assert!(birth_date(today, 16, 299) < born);
    }
}
