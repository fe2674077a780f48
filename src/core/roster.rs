//! In-memory roster of students plus the course catalog

use crate::core::catalog::CourseCatalog;
use crate::core::error::{Result, RosterError};
use crate::core::models::{Course, Enrollment, Learner, Student};
use crate::{debug, info};
use std::io::{self, Write};
use std::rc::Rc;

/// Separator printed before each student in listings
pub const LISTING_SEPARATOR: &str = "--------------------";

/// Holds every student, in the order they were added, and the catalog they
/// register against
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    catalog: CourseCatalog,
}

impl Roster {
    /// Create an empty roster over the given catalog
    #[must_use]
    pub const fn new(catalog: CourseCatalog) -> Self {
        Self {
            students: Vec::new(),
            catalog,
        }
    }

    /// Empty roster over the standard seeded catalog
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(CourseCatalog::seed())
    }

    /// Students in the order they were added
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The course catalog
    #[must_use]
    pub const fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Add a new student
    ///
    /// Identifiers are not checked for uniqueness; lookups return the first match.
    pub fn add_student(
        &mut self,
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> &Student {
        let index = self.students.len();
        self.students.push(Student::new(id, full_name, email));
        let student = &self.students[index];
        info!("Added student {} ({})", student.id, student.full_name);
        student
    }

    /// First student whose identifier matches `id`
    #[must_use]
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Mutable access to the first student whose identifier matches `id`
    pub fn find_student_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// First catalog course whose identifier matches `id`
    #[must_use]
    pub fn find_course(&self, id: &str) -> Option<&Rc<Course>> {
        self.catalog.find(id)
    }

    /// Register a student for a catalog course
    ///
    /// # Errors
    /// - `StudentNotFound` / `CourseNotFound` when a lookup misses; nothing is changed
    /// - `AlreadyEnrolled` when the student already has this course
    pub fn register_course_for_student(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Result<&Enrollment> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))?;
        let course = self
            .catalog
            .find(course_id)
            .map(Rc::clone)
            .ok_or_else(|| RosterError::CourseNotFound(course_id.to_string()))?;

        let enrollment = student.register_course(course)?;
        info!("Registered student {student_id} for course {course_id}");
        Ok(enrollment)
    }

    /// Record an exam score and recalculate the student's level
    ///
    /// The level is recalculated even when the student is not enrolled in
    /// `course_id`; that miss is still returned to the caller.
    ///
    /// # Errors
    /// - `StudentNotFound` when no student matches; nothing is changed
    /// - `EnrollmentNotFound` when the student has no enrollment for `course_id`
    pub fn record_score(&mut self, student_id: &str, course_id: &str, score: f64) -> Result<()> {
        let student = self
            .find_student_mut(student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))?;

        let outcome = student.take_exam(course_id, score);
        let level = student.calculate_level();
        debug!("Student {student_id} level recalculated: {level}");

        if outcome.is_ok() {
            info!("Recorded score {score} for student {student_id} in {course_id}");
        }
        outcome
    }

    /// Write every student's summary, each preceded by a separator line
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails
    pub fn list_students<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for student in &self.students {
            writeln!(out, "{LISTING_SEPARATOR}")?;
            writeln!(out, "{student}")?;
        }
        Ok(())
    }
}
