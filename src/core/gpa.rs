//! Credit-weighted GPA computation

use crate::core::models::Course;

/// Compute the credit-weighted grade-point average of a set of courses.
///
/// The weighted mean is Sum(score x credits) / Sum(credits), rounded to
/// 2 decimal places. An empty set, or a set whose total credits is 0,
/// yields 0.0 rather than dividing by zero.
#[must_use]
pub fn gpa(courses: &[Course]) -> f64 {
    let total_credits: u32 = courses.iter().map(|c| c.credits).sum();
    if total_credits == 0 {
        return 0.0;
    }

    let weighted_total: f64 = courses
        .iter()
        .map(|c| c.score * f64::from(c.credits))
        .sum();

    round_two(weighted_total / f64::from(total_credits))
}

/// Compute the GPA restricted to courses taken in the given semester.
///
/// Delegates to [`gpa`] over the filtered subset, so the empty-subset and
/// zero-credit behavior is identical.
#[must_use]
pub fn gpa_by_semester(courses: &[Course], semester: u32) -> f64 {
    let filtered: Vec<Course> = courses
        .iter()
        .filter(|c| c.semester == semester)
        .cloned()
        .collect();
    gpa(&filtered)
}

/// Round to 2 decimal places, half away from zero
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
