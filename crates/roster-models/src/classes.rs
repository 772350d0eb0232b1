//! Class roster.
//!
//! A [`Class`] exclusively owns its students. Every roster member has the
//! class's code and modality, emails are unique, and the roster never grows
//! past the class capacity. Failed operations leave the roster unchanged.

use chrono::NaiveDate;
use roster_core::{Capacity, ClassCode, Modality, RosterError, RosterResult};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument, warn};

use crate::students::{Student, UpdateStudentDto, today};

#[derive(Debug, Clone, Serialize)]
pub struct Class {
    code: ClassCode,
    maximum: Capacity,
    description: String,
    modality: Modality,
    students: Vec<Student>,
}

impl Class {
    pub fn new(
        code: u8,
        maximum: u8,
        description: impl Into<String>,
        modality: Modality,
    ) -> RosterResult<Self> {
        Ok(Self {
            code: ClassCode::new(code)?,
            maximum: Capacity::new(maximum)?,
            description: description.into(),
            modality,
            students: Vec::new(),
        })
    }

    pub fn code(&self) -> ClassCode {
        self.code
    }

    pub fn maximum(&self) -> Capacity {
        self.maximum
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Adds a student at the end of the roster.
    ///
    /// # Errors
    ///
    /// - `Capacity` when the roster is full
    /// - `Conflict` when the student's class code or modality differs from the
    ///   class, or another student already uses the same email
    #[instrument(skip(self, student), fields(class = %self.code, email = %student.email()))]
    pub fn enroll(&mut self, student: Student) -> RosterResult<&Student> {
        if let Err(err) = self.check_enrollment(&student) {
            warn!(kind = %err.kind(), "Enrollment rejected: {}", err.message());
            return Err(err);
        }

        self.students.push(student);
        info!(count = self.students.len(), "Student enrolled");
        Ok(&self.students[self.students.len() - 1])
    }

    fn check_enrollment(&self, student: &Student) -> RosterResult<()> {
        if self.is_full() {
            return Err(RosterError::capacity(format!(
                "class {} is full ({} students)",
                self.code, self.maximum
            )));
        }

        if student.class_code() != self.code {
            return Err(RosterError::conflict(format!(
                "student belongs to class {}, not class {}",
                student.class_code(),
                self.code
            )));
        }

        if self.find(student.email().as_str()).is_some() {
            return Err(RosterError::conflict(format!(
                "a student with email {} is already enrolled in class {}",
                student.email(),
                self.code
            )));
        }

        if student.modality() != self.modality {
            return Err(RosterError::conflict(format!(
                "student is {} but class {} is {}",
                student.modality(),
                self.code,
                self.modality
            )));
        }

        Ok(())
    }

    /// Removes the student with the given email and hands it back.
    #[instrument(skip(self), fields(class = %self.code))]
    pub fn unenroll(&mut self, email: &str) -> RosterResult<Student> {
        let Some(index) = self.position(email) else {
            let err = self.missing(email);
            warn!(kind = %err.kind(), "Unenroll rejected: {}", err.message());
            return Err(err);
        };

        let student = self.students.remove(index);
        info!(count = self.students.len(), "Student unenrolled");
        Ok(student)
    }

    /// Applies a partial update to an enrolled student as of today.
    pub fn update(&mut self, email: &str, dto: UpdateStudentDto) -> RosterResult<&Student> {
        self.update_as_of(email, dto, today())
    }

    /// Applies a partial update, checking the age rule against `today`.
    ///
    /// The update is built on a copy and re-validated (age, grades, modality
    /// against the class) before it replaces the enrolled student, so a
    /// rejected update changes nothing.
    #[instrument(skip(self, dto), fields(class = %self.code))]
    pub fn update_as_of(
        &mut self,
        email: &str,
        dto: UpdateStudentDto,
        today: NaiveDate,
    ) -> RosterResult<&Student> {
        debug!(?dto, "Updating student");

        let index = match self.position(email) {
            Some(index) => index,
            None => {
                let err = self.missing(email);
                warn!(kind = %err.kind(), "Update rejected: {}", err.message());
                return Err(err);
            }
        };

        let candidate = match self.students[index]
            .updated(&dto, today)
            .and_then(|candidate| self.check_update(candidate))
        {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(kind = %err.kind(), "Update rejected: {}", err.message());
                return Err(err);
            }
        };

        self.students[index] = candidate;
        info!("Student updated");
        Ok(&self.students[index])
    }

    fn check_update(&self, candidate: Student) -> RosterResult<Student> {
        if candidate.modality() != self.modality {
            return Err(RosterError::conflict(format!(
                "student would be {} but class {} is {}",
                candidate.modality(),
                self.code,
                self.modality
            )));
        }

        Ok(candidate)
    }

    pub fn find(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email() == email)
    }

    /// The roster in enrollment order.
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.maximum.get()
    }

    pub fn remaining_seats(&self) -> usize {
        self.maximum.get().saturating_sub(self.students.len())
    }

    pub fn active_count(&self) -> usize {
        self.students.iter().filter(|s| s.is_active()).count()
    }

    /// Mean of the students' averages, 0 for an empty roster.
    pub fn average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        self.students.iter().map(Student::average).sum::<f64>() / self.students.len() as f64
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.students.iter().position(|s| s.email() == email)
    }

    fn missing(&self, email: &str) -> RosterError {
        RosterError::not_found(format!(
            "no student with email {} in class {}",
            email, self.code
        ))
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class {} ({}), {}, {}/{} students",
            self.code,
            self.description,
            self.modality,
            self.students.len(),
            self.maximum
        )
    }
}
