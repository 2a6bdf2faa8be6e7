//! Data models for the gradebook

pub mod course;

pub use course::Course;
