//! Core module for the roster domain

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod roster;
pub mod session;

/// Returns the current version of the `NuRoster` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
