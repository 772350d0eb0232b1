//! Student domain model and DTOs.
//!
//! A [`Student`] can only be obtained through [`Student::create`] (or one of
//! its variants), which enforces the minimum age, the email format and the
//! grade rules. Enrolled students are changed through
//! [`Class::update`](crate::Class::update), which re-runs the same checks.

use chrono::{Datelike, Local, NaiveDate};
use roster_core::policy::MAX_GRADES;
use roster_core::{ClassCode, Email, GradePolicy, Modality, RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Minimum age, in whole years, at the time a student record is created.
pub const MIN_AGE: i32 = 16;

/// Average that separates the two halves of the school report.
pub const PASSING_AVERAGE: f64 = 6.0;

const MIN_GRADE: f64 = 0.0;
const MAX_GRADE: f64 = 10.0;

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub email: String,
    pub modality: Modality,
    pub class_code: u8,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub grades: Option<Vec<f64>>,
}

/// DTO for updating an enrolled student.
///
/// All fields are optional; only provided fields will be updated. Identity
/// fields are not part of it: the email identifies the student within the
/// class and the class code never changes.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub modality: Option<Modality>,
    pub birth_date: Option<NaiveDate>,
    pub grades: Option<Vec<f64>>,
    pub active: Option<bool>,
}

/// Where a student's average falls relative to [`PASSING_AVERAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Above,
    At,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    first_name: String,
    last_name: String,
    email: Email,
    modality: Modality,
    class_code: ClassCode,
    birth_date: NaiveDate,
    grades: Vec<f64>,
    active: bool,
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years between `birth_date` and `on`. Negative for future birth dates.
fn years_between(birth_date: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

fn check_age(birth_date: NaiveDate, today: NaiveDate) -> RosterResult<()> {
    let age = years_between(birth_date, today);
    if age < MIN_AGE {
        return Err(RosterError::validation(format!(
            "student must be at least {} years old, got {}",
            MIN_AGE, age
        )));
    }
    Ok(())
}

fn check_grades(grades: &[f64]) -> RosterResult<()> {
    if grades.len() > MAX_GRADES {
        return Err(RosterError::validation(format!(
            "a student can have at most {} grades, got {}",
            MAX_GRADES,
            grades.len()
        )));
    }
    if let Some(bad) = grades
        .iter()
        .find(|g| !(MIN_GRADE..=MAX_GRADE).contains(*g))
    {
        return Err(RosterError::validation(format!(
            "grades must be between {} and {}, got {}",
            MIN_GRADE, MAX_GRADE, bad
        )));
    }
    Ok(())
}

impl Student {
    /// Creates a student as of today, rejecting oversized grade lists.
    pub fn create(dto: CreateStudentDto) -> RosterResult<Self> {
        Self::create_as_of(dto, GradePolicy::default(), today())
    }

    pub fn create_with_policy(dto: CreateStudentDto, policy: GradePolicy) -> RosterResult<Self> {
        Self::create_as_of(dto, policy, today())
    }

    /// Creates a student, computing the age against `today`.
    pub fn create_as_of(
        dto: CreateStudentDto,
        policy: GradePolicy,
        today: NaiveDate,
    ) -> RosterResult<Self> {
        dto.validate()?;
        let email = Email::new(dto.email)?;
        let class_code = ClassCode::new(dto.class_code)?;
        check_age(dto.birth_date, today)?;

        let grades = policy.apply(dto.grades.unwrap_or_default())?;
        check_grades(&grades)?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email,
            modality: dto.modality,
            class_code,
            birth_date: dto.birth_date,
            grades,
            active: true,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn class_code(&self) -> ClassCode {
        self.class_code
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn age_on(&self, date: NaiveDate) -> i32 {
        years_between(self.birth_date, date)
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replaces the grade list. Oversized lists are always rejected here.
    pub fn set_grades(&mut self, grades: Vec<f64>) -> RosterResult<()> {
        check_grades(&grades)?;
        self.grades = grades;
        Ok(())
    }

    /// Arithmetic mean of the grades, 0 when there are none.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    pub fn standing(&self) -> Standing {
        let average = self.average();
        if average > PASSING_AVERAGE {
            Standing::Above
        } else if average < PASSING_AVERAGE {
            Standing::Below
        } else {
            Standing::At
        }
    }

    pub fn classify(&self) -> String {
        let name = self.full_name();
        match self.standing() {
            Standing::Above => format!("{} is above average", name),
            Standing::At => format!("{} is at average", name),
            Standing::Below => format!("{} is below average", name),
        }
    }

    /// Returns a copy with the DTO's fields applied and every
    /// student-level rule re-checked. `self` is left untouched.
    pub(crate) fn updated(&self, dto: &UpdateStudentDto, today: NaiveDate) -> RosterResult<Self> {
        dto.validate()?;

        let mut next = self.clone();
        if let Some(first_name) = &dto.first_name {
            next.first_name = first_name.clone();
        }
        if let Some(last_name) = &dto.last_name {
            next.last_name = last_name.clone();
        }
        if let Some(modality) = dto.modality {
            next.modality = modality;
        }
        if let Some(birth_date) = dto.birth_date {
            check_age(birth_date, today)?;
            next.birth_date = birth_date;
        }
        if let Some(grades) = &dto.grades {
            next.set_grades(grades.clone())?;
        }
        if let Some(active) = dto.active {
            next.active = active;
        }
        Ok(next)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grades = self
            .grades
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} <{}> class {}, {}, born {}, grades [{}], average {:.2}, {}",
            self.full_name(),
            self.email,
            self.class_code,
            self.modality,
            self.birth_date,
            grades,
            self.average(),
            if self.active { "active" } else { "inactive" }
        )
    }
}
