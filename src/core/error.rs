//! Error type shared by the roster, the exporter and the interaction loop

use std::path::PathBuf;
use thiserror::Error;

/// Every failure an operator action can run into.
///
/// None of these are fatal: the interaction loop reports the message and
/// returns to the menu.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Menu input was not an integer
    #[error("Please enter an integer, got '{0}'")]
    InvalidChoiceInput(String),

    /// Menu input was an integer outside the menu range
    #[error("Invalid choice: {0}")]
    InvalidChoice(i64),

    /// Score input was not a finite number
    #[error("Score must be a number, got '{0}'")]
    InvalidScore(String),

    /// No student with this ID
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    /// No course with this ID in the catalog
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// The student exists but has no enrollment for the course
    #[error("Course {course} not found among enrollments of student {student}")]
    EnrollmentNotFound {
        /// Student ID
        student: String,
        /// Course ID
        course: String,
    },

    /// The student is already enrolled in the course
    #[error("Student {student} is already enrolled in course {course}")]
    AlreadyEnrolled {
        /// Student ID
        student: String,
        /// Course ID
        course: String,
    },

    /// Writing the export file failed
    #[error("Failed to write {}: {source}", path.display())]
    Export {
        /// Target file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_identifier() {
        assert_eq!(
            RosterError::StudentNotFound("S9".to_string()).to_string(),
            "Student not found: S9"
        );
        assert_eq!(
            RosterError::CourseNotFound("C404".to_string()).to_string(),
            "Course not found: C404"
        );
        assert_eq!(
            RosterError::InvalidScore("abc".to_string()).to_string(),
            "Score must be a number, got 'abc'"
        );
    }

    #[test]
    fn test_export_error_keeps_source() {
        let err = RosterError::Export {
            path: PathBuf::from("/nope/students.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let message = err.to_string();
        assert!(message.contains("/nope/students.csv"));
        assert!(message.contains("no such directory"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
