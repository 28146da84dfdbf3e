//! Read-only queries over a loaded [`Catalog`].

use crate::catalog::Catalog;
use std::io::{Result, Write};

pub const NO_COURSES: &str = "No courses loaded. Please load the data first.";
pub const COURSE_NOT_FOUND: &str = "Course not found. Please check the course number and try again.";

/// Print every course as `<number>, <name>`, ordered by course number.
pub fn write_course_list(catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    if catalog.is_empty() {
        writeln!(out, "{NO_COURSES}")?;
        return Ok(());
    }

    writeln!(out, "\nHere is a sample schedule:\n")?;
    for number in catalog.sorted_keys() {
        if let Some(course) = catalog.get(number) {
            writeln!(out, "{course}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Normalise user input for lookup.
///
/// Only the query is uppercased; catalog keys keep their loaded casing, so a
/// course stored as `csci101` can never be found.
pub fn lookup_key(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Print one course and its prerequisites in source order.
///
/// Returns whether the course was found.
pub fn write_course_detail(catalog: &Catalog, input: &str, out: &mut dyn Write) -> Result<bool> {
    let key = lookup_key(input);
    let Some(course) = catalog.get(&key) else {
        tracing::debug!(query = input, "course lookup missed");
        writeln!(out, "{COURSE_NOT_FOUND}")?;
        return Ok(false);
    };

    writeln!(out, "{course}")?;
    if course.prerequisites.is_empty() {
        writeln!(out, "Prerequisites: None")?;
    } else {
        writeln!(out, "Prerequisites: {}", course.prerequisites.join(", "))?;
    }
    Ok(true)
}
