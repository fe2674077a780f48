//! CLI command handlers for `NuRoster`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod menu;
