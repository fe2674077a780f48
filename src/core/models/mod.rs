//! Data models for `NuRoster`

pub mod course;
pub mod enrollment;
pub mod student;

pub use course::{Course, Level};
pub use enrollment::Enrollment;
pub use student::{Learner, Student};
