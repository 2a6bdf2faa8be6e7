//! Core module for the gradebook: models, store, and GPA computation

pub mod config;
pub mod gpa;
pub mod models;
pub mod store;

/// Returns the current version of the `gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
