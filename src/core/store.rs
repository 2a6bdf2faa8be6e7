//! Gradebook store: owns the course record set and its persistence
//!
//! The full record set is loaded once at startup and the whole file is
//! rewritten after every successful mutation. Writes go through a temp
//! file in the same directory followed by a rename, so a crash mid-write
//! cannot leave a half-written gradebook behind.

use crate::core::models::Course;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure outcome of a store operation
#[derive(Debug)]
pub enum StoreError {
    /// No record with the given course code exists
    NotFound(String),
    /// A record with the given course code already exists
    Duplicate(String),
    /// The gradebook file could not be written
    Io(io::Error),
    /// The record set could not be serialized
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(code) => write!(f, "Course '{code}' not found"),
            Self::Duplicate(code) => write!(f, "Course code '{code}' already exists"),
            Self::Io(e) => write!(f, "Failed to write gradebook file: {e}"),
            Self::Serialize(e) => write!(f, "Failed to serialize gradebook: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::NotFound(_) | Self::Duplicate(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Sparse update for a course record
///
/// Only `Some` fields are applied; `None` fields keep their prior values.
/// The course code is the lookup key and is not updatable.
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    /// New course name
    pub name: Option<String>,
    /// New credit weight
    pub credits: Option<u32>,
    /// New semester number
    pub semester: Option<u32>,
    /// New score
    pub score: Option<f64>,
}

impl CourseUpdate {
    /// Returns `true` when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.credits.is_none()
            && self.semester.is_none()
            && self.score.is_none()
    }

    /// Overwrite exactly the fields present in this update
    fn apply(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name.clone_from(name);
        }
        if let Some(credits) = self.credits {
            course.credits = credits;
        }
        if let Some(semester) = self.semester {
            course.semester = semester;
        }
        if let Some(score) = self.score {
            course.score = score;
        }
    }
}

/// The gradebook: an ordered set of course records bound to a file
///
/// Insertion order is preserved and uniqueness on `code` is enforced at
/// insert time. Every successful mutation rewrites the whole file.
#[derive(Debug)]
pub struct Gradebook {
    path: PathBuf,
    courses: Vec<Course>,
}

impl Gradebook {
    /// Load a gradebook from `path`, or start empty when the file is
    /// absent or unreadable.
    ///
    /// Startup is never blocked: a corrupt file logs a warning and yields
    /// an empty record set, an absent file starts empty silently.
    #[must_use]
    pub fn load<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let courses = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(courses) => courses,
                Err(e) => {
                    crate::warn!("Ignoring corrupt gradebook file {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(_) => {
                crate::debug!("No gradebook file at {}; starting empty", path.display());
                Vec::new()
            }
        };
        Self { path, courses }
    }

    /// All course records in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of records in the gradebook
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` when the gradebook holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Find a record by its course code
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// The file this gradebook persists to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new course record and persist the full set.
    ///
    /// # Errors
    /// Returns [`StoreError::Duplicate`] when a record with the same code
    /// already exists (no mutation, no persist), or a write failure from
    /// persisting.
    pub fn add(&mut self, course: Course) -> Result<(), StoreError> {
        if self.find(&course.code).is_some() {
            return Err(StoreError::Duplicate(course.code));
        }
        crate::info!("Adding course {}", course.code);
        self.courses.push(course);
        self.save()
    }

    /// Apply a sparse update to the record with the given code and persist.
    ///
    /// Fields absent from `update` retain their prior values. An update
    /// with no fields set still persists (and succeeds) for a known code.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no record matches `code`, or
    /// a write failure from persisting.
    pub fn update(&mut self, code: &str, update: &CourseUpdate) -> Result<(), StoreError> {
        let Some(course) = self.courses.iter_mut().find(|c| c.code == code) else {
            return Err(StoreError::NotFound(code.to_string()));
        };
        update.apply(course);
        crate::info!("Updated course {code}");
        self.save()
    }

    /// Remove the record with the given code and persist.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no record matches `code`
    /// (the record set is left unchanged), or a write failure from
    /// persisting.
    pub fn delete(&mut self, code: &str) -> Result<(), StoreError> {
        let Some(index) = self.courses.iter().position(|c| c.code == code) else {
            return Err(StoreError::NotFound(code.to_string()));
        };
        self.courses.remove(index);
        crate::info!("Deleted course {code}");
        self.save()
    }

    /// Rewrite the whole gradebook file via temp file + rename.
    ///
    /// A failed write leaves the in-memory record set as mutated; the
    /// next successful mutation persists it.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.courses)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        crate::debug!(
            "Saved {} course(s) to {}",
            self.courses.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str) -> Course {
        Course::new(code.to_string(), format!("{code} name"), 3, 1, 7.0)
    }

    #[test]
    fn test_update_apply_partial() {
        let mut c = course("CS2510");
        let update = CourseUpdate {
            score: Some(9.5),
            ..Default::default()
        };

        update.apply(&mut c);

        assert_eq!(c.name, "CS2510 name");
        assert_eq!(c.credits, 3);
        assert_eq!(c.semester, 1);
        assert!((c.score - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_apply_all_fields() {
        let mut c = course("CS2510");
        let update = CourseUpdate {
            name: Some("Algorithms".to_string()),
            credits: Some(4),
            semester: Some(3),
            score: Some(6.75),
        };

        update.apply(&mut c);

        assert_eq!(c.code, "CS2510"); // code is never updatable
        assert_eq!(c.name, "Algorithms");
        assert_eq!(c.credits, 4);
        assert_eq!(c.semester, 3);
        assert!((c.score - 6.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(CourseUpdate::default().is_empty());
        assert!(!CourseUpdate {
            credits: Some(4),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::NotFound("CS0000".to_string()).to_string(),
            "Course 'CS0000' not found"
        );
        assert_eq!(
            StoreError::Duplicate("CS2510".to_string()).to_string(),
            "Course code 'CS2510' already exists"
        );
    }
}
