use chrono::NaiveDate;
use roster::{Class, CreateStudentDto, GradePolicy, Modality, School, Student};
use std::sync::atomic::{AtomicUsize, Ordering};

static EMAIL_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fixed "today" so age checks do not depend on the clock.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    let n = EMAIL_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("student-{}@test.com", n)
}

#[allow(dead_code)]
pub fn student_dto(email: &str, class_code: u8, modality: Modality) -> CreateStudentDto {
    CreateStudentDto {
        first_name: "Test".to_string(),
        last_name: "Student".to_string(),
        email: email.to_string(),
        modality,
        class_code,
        birth_date: NaiveDate::from_ymd_opt(2005, 6, 15).unwrap(),
        grades: None,
    }
}

/// Create a test student with the given grades, valid for `class_code`.
#[allow(dead_code)]
pub fn create_test_student(class_code: u8, modality: Modality, grades: &[f64]) -> Student {
    let mut dto = student_dto(&generate_unique_email(), class_code, modality);
    dto.grades = Some(grades.to_vec());
    Student::create_as_of(dto, GradePolicy::Reject, today()).unwrap()
}

#[allow(dead_code)]
pub fn create_test_class(code: u8, modality: Modality) -> Class {
    Class::new(code, 10, format!("Test class {}", code), modality).unwrap()
}

/// A school whose classes hold students with the given grade lists.
#[allow(dead_code)]
pub fn create_test_school(rosters: &[&[&[f64]]]) -> School {
    let mut school = School::new("Test School");
    for (i, roster) in rosters.iter().enumerate() {
        let code = (i + 1) as u8;
        let mut class = create_test_class(code, Modality::InPerson);
        for grades in roster.iter() {
            class
                .enroll(create_test_student(code, Modality::InPerson, grades))
                .unwrap();
        }
        school.add_class(class).unwrap();
    }
    school
}
