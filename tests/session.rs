use course_planner::session::{FAREWELL, LOAD_FIRST, OPEN_FAILED};
use course_planner::query::{COURSE_NOT_FOUND, NO_COURSES};
use course_planner::{ScriptedInput, Session, SessionState};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn course_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn sample_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/abcu_courses.csv")
}

fn run(lines: Vec<String>) -> String {
    let mut session = Session::new(ScriptedInput::new(lines), Vec::new());
    session.run().unwrap();
    let (_, _, out) = session.into_parts();
    String::from_utf8(out).unwrap()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Lines printed between the schedule heading and the following blank line.
fn schedule(out: &str) -> Vec<&str> {
    out.split("Here is a sample schedule:\n\n")
        .nth(1)
        .map(|rest| rest.split("\n\n").next().unwrap_or("").lines().collect())
        .unwrap_or_default()
}

#[test]
fn test_load_list_and_detail() {
    let file = course_file("CSCI100,Intro to CS,\nCSCI101,Data Structures,CSCI100\n");
    let path = file.path().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "2", "3", "csci101", "9"]));

    assert!(out.contains(&format!("Courses loaded successfully from {path}.")));
    assert_eq!(schedule(&out), vec!["CSCI100, Intro to CS", "CSCI101, Data Structures"]);
    assert!(out.contains("CSCI101, Data Structures\nPrerequisites: CSCI100\n"));
    assert!(out.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_list_is_sorted_for_sample_data() {
    let path = sample_data().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "2", "9"]));
    assert_eq!(
        schedule(&out),
        vec![
            "CSCI100, Introduction to Computer Science",
            "CSCI101, Introduction to Programming in C++",
            "CSCI200, Data Structures",
            "CSCI300, Introduction to Algorithms",
            "CSCI301, Advanced Programming in C++",
            "CSCI350, Operating Systems",
            "CSCI400, Large Software Development",
            "MATH201, Discrete Mathematics",
        ]
    );
}

#[test]
fn test_unknown_course_prints_only_not_found() {
    let path = sample_data().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "3", "MATH999", "9"]));
    let after_lookup = out.split(COURSE_NOT_FOUND).nth(1).unwrap();
    assert!(!after_lookup.contains("Prerequisites"));
    assert!(!out.contains("MATH999,"));
}

#[test]
fn test_queries_before_load() {
    let out = run(lines(&["2", "3", "9"]));
    assert_eq!(out.matches(LOAD_FIRST).count(), 2);
}

#[test]
fn test_failed_load_keeps_previous_catalog() {
    let file = course_file("CSCI100,Intro to CS\n");
    let path = file.path().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "1", "/no/such/file.csv", "2", "9"]));

    assert!(out.contains(OPEN_FAILED));
    assert_eq!(schedule(&out), vec!["CSCI100, Intro to CS"]);
}

#[test]
fn test_failed_first_load_reports_empty_catalog() {
    let out = run(lines(&["1", "/no/such/file.csv", "2", "3", "CSCI100", "9"]));
    assert!(out.contains(OPEN_FAILED));
    assert!(out.contains(NO_COURSES));
    assert!(out.contains(COURSE_NOT_FOUND));
    assert!(!out.contains(LOAD_FIRST));
}

#[test]
fn test_empty_file_counts_as_loaded() {
    let file = course_file("\nonly-one-field\n");
    let path = file.path().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "2", "9"]));
    assert!(out.contains(&format!("Courses loaded successfully from {path}.")));
    assert!(out.contains(NO_COURSES));
}

#[test]
fn test_duplicate_course_last_write_wins() {
    let file = course_file("CSCI200,Old Name,CSCI100\nCSCI200,Data Structures\n");
    let path = file.path().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "3", "CSCI200", "9"]));
    assert!(out.contains("CSCI200, Data Structures\nPrerequisites: None\n"));
    assert!(!out.contains("Old Name"));
}

#[test]
fn test_lowercase_stored_key_is_not_found() {
    let file = course_file("csci101,Lowercase Course\n");
    let path = file.path().to_string_lossy().to_string();
    let out = run(lines(&["1", path.as_str(), "2", "3", "CSCI101", "3", "csci101", "9"]));
    assert_eq!(schedule(&out), vec!["csci101, Lowercase Course"]);
    assert_eq!(out.matches(COURSE_NOT_FOUND).count(), 2);
}

#[test]
fn test_reload_replaces_catalog() {
    let first = course_file("OLD100,Old Course\n");
    let second = course_file("NEW100,New Course\n");
    let first_path = first.path().to_string_lossy().to_string();
    let second_path = second.path().to_string_lossy().to_string();
    let out = run(lines(&["1", first_path.as_str(), "1", second_path.as_str(), "2", "9"]));
    assert_eq!(schedule(&out), vec!["NEW100, New Course"]);
}

#[test]
fn test_invalid_choices_then_exit() {
    let mut session = Session::new(ScriptedInput::new(["x", "4", "7", "9"]), Vec::new());
    session.run().unwrap();
    assert_eq!(session.state(), SessionState::NotLoaded);
    let (_, input, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Invalid input. Please enter a number between 1 and 9."));
    assert!(out.contains("4 is not a valid option. Please choose 1, 2, 3, or 9."));
    assert!(out.contains("7 is not a valid option. Please choose 1, 2, 3, or 9."));
    assert_eq!(input.prompts().len(), 4);
}
