//! School: an ordered set of classes with unique codes.

use chrono::NaiveDate;
use roster_core::{ClassCode, RosterError, RosterResult};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::classes::Class;
use crate::reports::{ReportSink, SchoolReport};
use crate::students::{PASSING_AVERAGE, Student, UpdateStudentDto, today};

/// Maximum number of classes a school holds.
pub const MAX_CLASSES: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct School {
    name: String,
    classes: Vec<Class>,
}

impl School {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a class at the end of the class list.
    ///
    /// # Errors
    ///
    /// - `Capacity` when the school already holds [`MAX_CLASSES`] classes
    /// - `Conflict` when a class with the same code is registered
    #[instrument(skip(self, class), fields(school = %self.name, code = %class.code()))]
    pub fn add_class(&mut self, class: Class) -> RosterResult<()> {
        let check = if self.classes.len() >= MAX_CLASSES {
            Err(RosterError::capacity(format!(
                "school {} already has {} classes",
                self.name, MAX_CLASSES
            )))
        } else if self.class(class.code().get()).is_some() {
            Err(RosterError::conflict(format!(
                "class {} is already registered in school {}",
                class.code(),
                self.name
            )))
        } else {
            Ok(())
        };

        if let Err(err) = check {
            warn!(kind = %err.kind(), "Class rejected: {}", err.message());
            return Err(err);
        }

        self.classes.push(class);
        info!(count = self.classes.len(), "Class added");
        Ok(())
    }

    /// Removes the class with the given code, returning it with its roster.
    #[instrument(skip(self), fields(school = %self.name))]
    pub fn remove_class(&mut self, code: u8) -> RosterResult<Class> {
        let Some(index) = self.position(code) else {
            let err = self.missing(code);
            warn!(kind = %err.kind(), "Class removal rejected: {}", err.message());
            return Err(err);
        };

        let class = self.classes.remove(index);
        info!(count = self.classes.len(), "Class removed");
        Ok(class)
    }

    /// Classes in registration order.
    pub fn list_classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn count_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn class(&self, code: u8) -> Option<&Class> {
        self.classes.iter().find(|c| c.code().get() == code)
    }

    /// Enrolls a student in the class with the given code.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no class has this code
    /// - anything [`Class::enroll`] rejects
    pub fn enroll(&mut self, code: u8, student: Student) -> RosterResult<&Student> {
        self.class_for(code)?.enroll(student)
    }

    /// Removes a student from the class with the given code.
    pub fn unenroll(&mut self, code: u8, email: &str) -> RosterResult<Student> {
        self.class_for(code)?.unenroll(email)
    }

    /// Applies a partial update to a student of the class with the given code.
    pub fn update_student(
        &mut self,
        code: u8,
        email: &str,
        dto: UpdateStudentDto,
    ) -> RosterResult<&Student> {
        self.update_student_as_of(code, email, dto, today())
    }

    pub fn update_student_as_of(
        &mut self,
        code: u8,
        email: &str,
        dto: UpdateStudentDto,
        today: NaiveDate,
    ) -> RosterResult<&Student> {
        self.class_for(code)?.update_as_of(email, dto, today)
    }

    /// First student with this email, searching classes in order.
    pub fn find_student(&self, email: &str) -> Option<(&Class, &Student)> {
        self.classes
            .iter()
            .find_map(|class| class.find(email).map(|student| (class, student)))
    }

    pub fn codes(&self) -> Vec<ClassCode> {
        self.classes.iter().map(Class::code).collect()
    }

    /// Aggregates over the current rosters without writing anywhere.
    pub fn report(&self) -> SchoolReport {
        let students = self.classes.iter().flat_map(Class::list);
        let (passing, failing) = students.fold((0, 0), |(passing, failing), s| {
            if s.average() >= PASSING_AVERAGE {
                (passing + 1, failing)
            } else {
                (passing, failing + 1)
            }
        });

        SchoolReport {
            school_name: self.name.clone(),
            class_count: self.classes.len(),
            total_students: self.classes.iter().map(Class::count).sum(),
            passing,
            failing,
        }
    }

    /// Computes the report and writes its five lines to `sink`.
    pub fn generate_report(&self, sink: &mut dyn ReportSink) -> SchoolReport {
        let report = self.report();
        report.write_to(sink);
        report
    }

    fn position(&self, code: u8) -> Option<usize> {
        self.classes.iter().position(|c| c.code().get() == code)
    }

    fn missing(&self, code: u8) -> RosterError {
        RosterError::not_found(format!(
            "no class with code {} in school {}",
            code, self.name
        ))
    }

    /// The class with this code, borrowed only long enough to delegate one
    /// roster operation. Classes are never handed out mutably.
    #[instrument(skip(self), fields(school = %self.name))]
    fn class_for(&mut self, code: u8) -> RosterResult<&mut Class> {
        match self.position(code) {
            Some(index) => Ok(&mut self.classes[index]),
            None => {
                let err = self.missing(code);
                warn!(kind = %err.kind(), "Roster change rejected: {}", err.message());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::MemorySink;
    use crate::students::CreateStudentDto;
    use chrono::NaiveDate;
    use roster_core::{ErrorKind, GradePolicy, Modality};

    fn student(email: &str, class_code: u8, grades: Vec<f64>) -> Student {
        Student::create_as_of(
            CreateStudentDto {
                first_name: "Ana".to_string(),
                last_name: "Costa".to_string(),
                email: email.to_string(),
                modality: Modality::Remote,
                class_code,
                birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                grades: Some(grades),
            },
            GradePolicy::Reject,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        )
        .unwrap()
    }

    fn class(code: u8) -> Class {
        Class::new(code, 10, format!("Class {}", code), Modality::Remote).unwrap()
    }

    #[test]
    fn test_add_and_list_classes() {
        let mut school = School::new("Escola");
        school.add_class(class(3)).unwrap();
        school.add_class(class(1)).unwrap();
        let codes: Vec<u8> = school.codes().iter().map(|c| c.get()).collect();
        assert_eq!(codes, vec![3, 1]);
        assert_eq!(school.count_classes(), 2);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut school = School::new("Escola");
        school.add_class(class(1)).unwrap();
        let err = school.add_class(class(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(school.count_classes(), 1);
    }

    #[test]
    fn test_eleventh_class_rejected() {
        let mut school = School::new("Escola");
        for code in 1..=10 {
            school.add_class(class(code)).unwrap();
        }
        let err = school.add_class(class(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(school.count_classes(), MAX_CLASSES);
    }

    #[test]
    fn test_remove_class() {
        let mut school = School::new("Escola");
        school.add_class(class(1)).unwrap();
        school.add_class(class(2)).unwrap();
        let removed = school.remove_class(1).unwrap();
        assert_eq!(removed.code().get(), 1);
        assert!(school.class(1).is_none());
        assert_eq!(
            school.remove_class(1).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_find_student_across_classes() {
        let mut school = School::new("Escola");
        school.add_class(class(1)).unwrap();
        school.add_class(class(2)).unwrap();
        school.enroll(2, student("x@y.com", 2, vec![])).unwrap();
        let (found_in, s) = school.find_student("x@y.com").unwrap();
        assert_eq!(found_in.code().get(), 2);
        assert_eq!(s.email().as_str(), "x@y.com");
        assert!(school.find_student("nobody@y.com").is_none());
    }

    #[test]
    fn test_roster_changes_keep_codes_unique() {
        let mut school = School::new("Escola");
        school.add_class(class(1)).unwrap();
        school.add_class(class(2)).unwrap();

        school.enroll(1, student("a@y.com", 1, vec![5.0])).unwrap();
        school.enroll(2, student("b@y.com", 2, vec![])).unwrap();
        let err = school
            .enroll(1, student("c@y.com", 2, vec![]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let updated = school
            .update_student_as_of(
                1,
                "a@y.com",
                UpdateStudentDto {
                    grades: Some(vec![9.0]),
                    ..Default::default()
                },
                NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            )
            .unwrap();
        assert_eq!(updated.average(), 9.0);
        school.unenroll(2, "b@y.com").unwrap();

        let codes: Vec<u8> = school.codes().iter().map(|c| c.get()).collect();
        assert_eq!(codes, vec![1, 2]);
        assert_eq!(school.class(1).unwrap().count(), 1);
        assert_eq!(school.class(2).unwrap().count(), 0);
    }

    #[test]
    fn test_roster_changes_on_unknown_code() {
        let mut school = School::new("Escola");
        school.add_class(class(1)).unwrap();

        let err = school.enroll(3, student("a@y.com", 3, vec![])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            school.unenroll(3, "a@y.com").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            school
                .update_student(3, "a@y.com", UpdateStudentDto::default())
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(school.class(1).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_report_counts() {
        let mut school = School::new("Escola");
        let mut first = class(1);
        first.enroll(student("a@y.com", 1, vec![6.0])).unwrap();
        first.enroll(student("b@y.com", 1, vec![5.9])).unwrap();
        first.enroll(student("c@y.com", 1, vec![])).unwrap();
        let mut second = class(2);
        second.enroll(student("d@y.com", 2, vec![9.0, 10.0])).unwrap();
        school.add_class(first).unwrap();
        school.add_class(second).unwrap();

        let mut sink = MemorySink::default();
        let report = school.generate_report(&mut sink);

        assert_eq!(report.class_count, 2);
        assert_eq!(report.total_students, 4);
        assert_eq!(report.passing, 2);
        assert_eq!(report.failing, 2);
        assert_eq!(sink.lines.len(), 5);
        assert_eq!(sink.lines[0], "School: Escola");
        assert_eq!(sink.lines[2], "Total students: 4");
    }

    #[test]
    fn test_report_is_read_only() {
        let mut school = School::new("Escola");
        let mut first = class(1);
        first.enroll(student("a@y.com", 1, vec![7.0])).unwrap();
        school.add_class(first).unwrap();

        let mut sink = MemorySink::default();
        school.generate_report(&mut sink);
        school.generate_report(&mut sink);
        assert_eq!(sink.lines.len(), 10);
        assert_eq!(school.class(1).unwrap().count(), 1);
    }
}
