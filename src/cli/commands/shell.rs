//! Interactive gradebook shell
//!
//! Presents the numbered menu, collects and validates fields, dispatches
//! to the store, and prints outcomes. Typed prompts re-prompt on invalid
//! input; the score is range-checked to [0, 10] at entry time.

use dialoguer::Input;
use gradebook::core::gpa::{gpa, gpa_by_semester};
use gradebook::core::models::Course;
use gradebook::core::store::{CourseUpdate, Gradebook, StoreError};
use gradebook::error;
use std::io;

/// Run the interactive menu loop until the user chooses Exit.
///
/// Every domain failure (duplicate code, unknown code, write failure) is
/// reported and the loop continues.
///
/// # Errors
/// Returns an error only when the terminal itself fails (EOF, broken
/// pipe, no tty).
pub fn run(gradebook: &mut Gradebook) -> io::Result<()> {
    loop {
        print_menu();
        let choice: String = Input::new().with_prompt("Choose an option").interact_text()?;

        match choice.trim() {
            "1" => handle_add(gradebook)?,
            "2" => handle_update(gradebook)?,
            "3" => handle_delete(gradebook)?,
            "4" => print_gradebook(gradebook),
            "5" => println!("Overall GPA: {:.2}", gpa(gradebook.courses())),
            "6" => handle_gpa_by_semester(gradebook)?,
            "0" => break,
            other => println!("✗ Invalid choice: '{other}'"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("===== Student Gradebook =====");
    println!(" 1. Add course");
    println!(" 2. Update course");
    println!(" 3. Delete course");
    println!(" 4. View gradebook");
    println!(" 5. Calculate GPA");
    println!(" 6. GPA by semester");
    println!(" 0. Exit");
    println!("=============================");
}

/// Collect all five fields and add a new course record
fn handle_add(gradebook: &mut Gradebook) -> io::Result<()> {
    let code: String = Input::new()
        .with_prompt("Course code")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Course code must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let name: String = Input::new().with_prompt("Course name").interact_text()?;
    let credits: u32 = Input::new().with_prompt("Credits").interact_text()?;
    let semester = prompt_semester()?;
    let score = prompt_score()?;

    let course = Course::new(
        code.trim().to_string(),
        name.trim().to_string(),
        credits,
        semester,
        score,
    );
    match gradebook.add(course) {
        Ok(()) => println!("✓ Course added."),
        Err(e) => report(&e),
    }
    Ok(())
}

/// Collect blank-skippable fields and apply a sparse update
fn handle_update(gradebook: &mut Gradebook) -> io::Result<()> {
    let code: String = Input::new()
        .with_prompt("Course code to update")
        .interact_text()?;
    let code = code.trim();

    if gradebook.find(code).is_none() {
        println!("✗ Course '{code}' not found.");
        return Ok(());
    }

    println!("Leave any field blank to keep its current value.");
    let mut update = CourseUpdate {
        name: optional_field("New name")?,
        ..Default::default()
    };

    if let Some(raw) = optional_field("New credits")? {
        match raw.parse::<u32>() {
            Ok(credits) => update.credits = Some(credits),
            Err(_) => {
                println!("✗ Invalid credits value '{raw}'; update cancelled.");
                return Ok(());
            }
        }
    }

    if let Some(raw) = optional_field("New semester")? {
        match raw.parse::<u32>() {
            Ok(semester) if semester >= 1 => update.semester = Some(semester),
            _ => {
                println!("✗ Invalid semester value '{raw}'; update cancelled.");
                return Ok(());
            }
        }
    }

    if let Some(raw) = optional_field("New score")? {
        match raw.parse::<f64>() {
            Ok(score) if (0.0..=10.0).contains(&score) => update.score = Some(score),
            _ => {
                println!("✗ Invalid score value '{raw}' (must be 0-10); update cancelled.");
                return Ok(());
            }
        }
    }

    if update.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    match gradebook.update(code, &update) {
        Ok(()) => println!("✓ Course updated."),
        Err(e) => report(&e),
    }
    Ok(())
}

fn handle_delete(gradebook: &mut Gradebook) -> io::Result<()> {
    let code: String = Input::new()
        .with_prompt("Course code to delete")
        .interact_text()?;

    match gradebook.delete(code.trim()) {
        Ok(()) => println!("✓ Course deleted."),
        Err(e) => report(&e),
    }
    Ok(())
}

/// Print all records in insertion order with all fields
fn print_gradebook(gradebook: &Gradebook) {
    if gradebook.is_empty() {
        println!("\nNo courses found.");
        return;
    }

    println!("\n========================== GRADEBOOK ==========================");
    for course in gradebook.courses() {
        println!(
            "{:<10} | {:<28} | {:>2} credits | Semester {:>2} | Score: {:.2}",
            course.code, course.name, course.credits, course.semester, course.score
        );
    }
    println!("===============================================================");
}

fn handle_gpa_by_semester(gradebook: &Gradebook) -> io::Result<()> {
    let semester = prompt_semester()?;
    println!(
        "Semester {semester} GPA: {:.2}",
        gpa_by_semester(gradebook.courses(), semester)
    );
    Ok(())
}

/// Prompt for a semester number, re-prompting until it is at least 1
fn prompt_semester() -> io::Result<u32> {
    Input::<u32>::new()
        .with_prompt("Semester")
        .validate_with(|semester: &u32| {
            if *semester >= 1 {
                Ok(())
            } else {
                Err("Semester must be at least 1")
            }
        })
        .interact_text()
}

/// Prompt for a score, re-prompting until it is inside [0, 10]
fn prompt_score() -> io::Result<f64> {
    Input::<f64>::new()
        .with_prompt("Score (0-10)")
        .validate_with(|score: &f64| {
            if (0.0..=10.0).contains(score) {
                Ok(())
            } else {
                Err("Score must be between 0 and 10")
            }
        })
        .interact_text()
}

/// Read an optional field; a blank entry keeps the current value
fn optional_field(prompt: &str) -> io::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok(if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    })
}

fn report(err: &StoreError) {
    error!("{err}");
    println!("✗ {err}");
}
