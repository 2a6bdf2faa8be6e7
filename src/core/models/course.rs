//! Course record model

use serde::{Deserialize, Serialize};

/// A single tracked course in the gradebook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within the gradebook (e.g., "CS2510")
    pub code: String,

    /// Course name (e.g., "Fundamentals of Computer Science 2")
    pub name: String,

    /// Credit weight used when averaging scores
    pub credits: u32,

    /// Semester number the course was taken in (1-based)
    pub semester: u32,

    /// Score on a 0-10 scale, range-checked at entry time
    pub score: f64,
}

impl Course {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `code` - Course code, used as the lookup key
    /// * `name` - Full course name
    /// * `credits` - Credit weight
    /// * `semester` - Semester number
    /// * `score` - Score on a 0-10 scale
    #[must_use]
    pub const fn new(code: String, name: String, credits: u32, semester: u32, score: f64) -> Self {
        Self {
            code,
            name,
            credits,
            semester,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CS1800".to_string(),
            "Discrete Structures".to_string(),
            4,
            1,
            8.5,
        );

        assert_eq!(course.code, "CS1800");
        assert_eq!(course.name, "Discrete Structures");
        assert_eq!(course.credits, 4);
        assert_eq!(course.semester, 1);
        assert!((course.score - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_course_serde_round_trip() {
        let course = Course::new(
            "MATH1342".to_string(),
            "Calculus I".to_string(),
            4,
            2,
            7.25,
        );

        let json = serde_json::to_string(&course).expect("Failed to serialize course");
        let back: Course = serde_json::from_str(&json).expect("Failed to deserialize course");

        assert_eq!(back, course);
    }
}
