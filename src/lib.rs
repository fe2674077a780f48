//! Shared library for `NuRoster`
//! Contains the student/course domain, the interaction loop and the CSV exporter
//! used by the `nuroster` binary.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::error::{Result, RosterError};
pub use crate::core::get_version;
