//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Average score at or above which a student is `Advanced`
pub const ADVANCED_THRESHOLD: f64 = 8.0;

/// Average score at or above which a student is `Intermediate`
pub const INTERMEDIATE_THRESHOLD: f64 = 5.0;

/// Proficiency level, used both as a course's difficulty tag and as a
/// student's derived level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Entry level
    Beginner,
    /// Middle level
    Intermediate,
    /// Top level
    Advanced,
}

impl Level {
    /// Map an average score to a level
    ///
    /// `mean >= 8` is `Advanced`, `5 <= mean < 8` is `Intermediate`,
    /// anything lower is `Beginner`.
    #[must_use]
    pub fn from_average(mean: f64) -> Self {
        if mean >= ADVANCED_THRESHOLD {
            Self::Advanced
        } else if mean >= INTERMEDIATE_THRESHOLD {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    /// Level name as printed in listings and exports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a course offered in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g., "C001")
    pub id: String,

    /// Display name (e.g., "Python Foundations")
    pub name: String,

    /// Difficulty tag
    pub level: Level,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `name` - Display name
    /// * `level` - Difficulty tag
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: Level) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.name, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("C003", "Python Foundations", Level::Intermediate);

        assert_eq!(course.id, "C003");
        assert_eq!(course.name, "Python Foundations");
        assert_eq!(course.level, Level::Intermediate);
    }

    #[test]
    fn test_course_display() {
        let course = Course::new("C002", "Advanced Java", Level::Advanced);
        assert_eq!(course.to_string(), "C002: Advanced Java (Advanced)");
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::from_average(10.0), Level::Advanced);
        assert_eq!(Level::from_average(8.0), Level::Advanced);
        assert_eq!(Level::from_average(7.99), Level::Intermediate);
        assert_eq!(Level::from_average(5.0), Level::Intermediate);
        assert_eq!(Level::from_average(4.99), Level::Beginner);
        assert_eq!(Level::from_average(0.0), Level::Beginner);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Beginner.to_string(), "Beginner");
        assert_eq!(Level::Intermediate.to_string(), "Intermediate");
        assert_eq!(Level::Advanced.to_string(), "Advanced");
    }
}
