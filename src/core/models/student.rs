//! Student model

use super::{Course, Enrollment, Level};
use crate::core::error::{Result, RosterError};
use std::fmt;
use std::rc::Rc;

/// Label shown for a student whose level has never been calculated
pub const UNDETERMINED_LEVEL: &str = "undetermined";

/// Capability of taking courses and exams
pub trait Learner {
    /// Enroll in a course with a zero score
    ///
    /// # Errors
    /// Returns `RosterError::AlreadyEnrolled` if an enrollment for the same course exists
    fn register_course(&mut self, course: Rc<Course>) -> Result<&Enrollment>;

    /// Record an exam score for an enrolled course
    ///
    /// # Errors
    /// Returns `RosterError::EnrollmentNotFound` if the learner is not enrolled in `course_id`
    fn take_exam(&mut self, course_id: &str, score: f64) -> Result<()>;
}

/// A registered student and their enrollments
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Student identifier (e.g., "S001")
    pub id: String,

    /// Full name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Derived level; `None` until [`Student::calculate_level`] runs
    level: Option<Level>,

    /// Enrollments in registration order
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a student with no enrollments and an undetermined level
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            level: None,
            enrollments: Vec::new(),
        }
    }

    /// Last calculated level, if any
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        self.level
    }

    /// Level as printed in listings and exports
    #[must_use]
    pub fn level_label(&self) -> &'static str {
        self.level.map_or(UNDETERMINED_LEVEL, Level::as_str)
    }

    /// Enrollments in registration order
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Find the first enrollment for a course
    #[must_use]
    pub fn enrollment(&self, course_id: &str) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.course_id() == course_id)
    }

    /// Arithmetic mean of all enrollment scores, 0 when there are none
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.enrollments.is_empty() {
            return 0.0;
        }
        let total: f64 = self.enrollments.iter().map(|e| e.score).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.enrollments.len() as f64;
        total / count
    }

    /// Recompute the level from the current average score
    ///
    /// Not called automatically; callers run it after changing scores.
    pub fn calculate_level(&mut self) -> Level {
        let level = Level::from_average(self.average_score());
        self.level = Some(level);
        level
    }

    /// Textual summary: identity, level, then one line per enrollment
    #[must_use]
    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl Learner for Student {
    fn register_course(&mut self, course: Rc<Course>) -> Result<&Enrollment> {
        if self.enrollment(&course.id).is_some() {
            return Err(RosterError::AlreadyEnrolled {
                student: self.id.clone(),
                course: course.id.clone(),
            });
        }
        let index = self.enrollments.len();
        self.enrollments.push(Enrollment::new(course));
        Ok(&self.enrollments[index])
    }

    fn take_exam(&mut self, course_id: &str, score: f64) -> Result<()> {
        let enrollment = self
            .enrollments
            .iter_mut()
            .find(|e| e.course_id() == course_id)
            .ok_or_else(|| RosterError::EnrollmentNotFound {
                student: self.id.clone(),
                course: course_id.to_string(),
            })?;
        enrollment.set_score(score);
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {} | Email: {}", self.full_name, self.email)?;
        write!(f, "ID: {} | Level: {}", self.id, self.level_label())?;
        for e in &self.enrollments {
            write!(
                f,
                "\n   - {} ({}) | Score: {}",
                e.course.name, e.course.level, e.score
            )?;
        }
        Ok(())
    }
}
