//! Course catalog seeded at startup

use crate::core::models::{Course, Level};
use std::rc::Rc;

/// The set of courses students can register for.
///
/// Populated once and never modified afterwards. Courses are shared with the
/// enrollments that reference them.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Rc<Course>>,
}

impl CourseCatalog {
    /// Catalog with the three standard courses
    #[must_use]
    pub fn seed() -> Self {
        Self::from_courses(vec![
            Course::new("C001", "C# Fundamentals", Level::Beginner),
            Course::new("C002", "Advanced Java", Level::Advanced),
            Course::new("C003", "Python Foundations", Level::Intermediate),
        ])
    }

    /// Build a catalog from an explicit list of courses, keeping their order
    #[must_use]
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: courses.into_iter().map(Rc::new).collect(),
        }
    }

    /// First course whose identifier matches `id`
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Rc<Course>> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Courses in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Course>> {
        self.courses.iter()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_three_courses() {
        let catalog = CourseCatalog::seed();
        assert_eq!(catalog.len(), 3);

        let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "C002", "C003"]);
    }

    #[test]
    fn test_find() {
        let catalog = CourseCatalog::seed();
        let java = catalog.find("C002").expect("C002 is seeded");
        assert_eq!(java.name, "Advanced Java");
        assert_eq!(java.level, Level::Advanced);

        assert!(catalog.find("C004").is_none());
        assert!(catalog.find("c001").is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let catalog = CourseCatalog::from_courses(vec![
            Course::new("X1", "First", Level::Beginner),
            Course::new("X1", "Second", Level::Advanced),
        ]);
        assert_eq!(catalog.find("X1").map(|c| c.name.as_str()), Some("First"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CourseCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.find("C001").is_none());
    }
}
