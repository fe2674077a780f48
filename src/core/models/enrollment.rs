//! Enrollment model

use super::Course;
use std::rc::Rc;

/// A student's registration in one course, carrying the exam score.
///
/// Owned by its `Student`; the course is shared with the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    /// The course this enrollment refers to
    pub course: Rc<Course>,

    /// Exam score, 0 until a score is recorded
    pub score: f64,
}

impl Enrollment {
    /// Create an enrollment with a zero score
    #[must_use]
    pub const fn new(course: Rc<Course>) -> Self {
        Self { course, score: 0.0 }
    }

    /// Identifier of the enrolled course
    #[must_use]
    pub fn course_id(&self) -> &str {
        &self.course.id
    }

    /// Overwrite the recorded score
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }
}
