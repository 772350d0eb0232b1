mod common;

use chrono::NaiveDate;
use common::{create_test_student, student_dto, today};
use roster::{ErrorKind, GradePolicy, Modality, RosterConfig, Standing, Student};

#[test]
fn test_student_average_scenario() {
    let student = create_test_student(1, Modality::InPerson, &[8.0, 9.0, 10.0]);
    assert_eq!(student.average(), 9.0);
    assert_eq!(student.standing(), Standing::Above);
    assert!(student.classify().ends_with("above average"));
}

#[test]
fn test_empty_grades_is_below_average() {
    let student = create_test_student(1, Modality::InPerson, &[]);
    assert_eq!(student.average(), 0.0);
    assert_eq!(student.standing(), Standing::Below);
}

#[test]
fn test_minimum_age_boundary() {
    let mut dto = student_dto("edge@test.com", 1, Modality::Remote);
    dto.birth_date = NaiveDate::from_ymd_opt(2010, 10, 19).unwrap();
    assert!(Student::create_as_of(dto.clone(), GradePolicy::Reject, today()).is_ok());

    dto.birth_date = NaiveDate::from_ymd_opt(2010, 10, 20).unwrap();
    let err = Student::create_as_of(dto, GradePolicy::Reject, today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_oversized_grades_follow_configured_policy() {
    let mut dto = student_dto("many@test.com", 1, Modality::Remote);
    dto.grades = Some(vec![9.0; 6]);

    let lookup = |key: &str| match key {
        "ROSTER_OVERSIZED_GRADES" => Some("discard".to_string()),
        _ => None,
    };
    let config = RosterConfig::from_lookup(lookup);

    let student = Student::create_as_of(dto.clone(), config.oversized_grades, today()).unwrap();
    assert!(student.grades().is_empty());

    let default_config = RosterConfig::default();
    let err = Student::create_as_of(dto, default_config.oversized_grades, today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
