//! Menu-driven planner session.
//!
//! The session owns the [`Catalog`] and moves between two states:
//! [`SessionState::NotLoaded`] until the load option has been chosen once,
//! and [`SessionState::Loaded`] afterwards. The state only gates the list and
//! detail options; whether a query finds anything depends on the catalog
//! contents alone.

use crate::catalog::Catalog;
use crate::console::LineSource;
use crate::error::{CatalogError, ChoiceError};
use crate::query::{write_course_detail, write_course_list};
use anyhow::{Context, Result};
use std::io::Write;
use std::ops::ControlFlow;

pub const GREETING: &str = "Welcome to the ABCU Course Planner!";
pub const FAREWELL: &str = "Thank you for using the ABCU Course Planner! Goodbye!";
pub const LOAD_FIRST: &str = "Please load the data first (Option 1).";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number between 1 and 9.";
pub const OPEN_FAILED: &str = "Error: Could not open file. Please check the path and try again.";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const PATH_PROMPT: &str = "Enter the full path and file name to load (e.g., C:\\\\Users\\\\Name\\\\ABCU_Advising_Program_Input.csv): ";
pub const COURSE_PROMPT: &str = "Enter the course number you want to know about (e.g., CSCI400): ";

/// Whether the load option has been chosen at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotLoaded,
    Loaded,
}

/// Accepted menu codes. Codes 4 to 8 are reserved and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Detail,
    Exit,
}

impl MenuChoice {
    pub fn code(self) -> i32 {
        match self {
            MenuChoice::Load => 1,
            MenuChoice::List => 2,
            MenuChoice::Detail => 3,
            MenuChoice::Exit => 9,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, ChoiceError> {
        match code {
            1 => Ok(MenuChoice::Load),
            2 => Ok(MenuChoice::List),
            3 => Ok(MenuChoice::Detail),
            9 => Ok(MenuChoice::Exit),
            other => Err(ChoiceError::Unrecognized(other)),
        }
    }

    /// Parse a menu line. Surrounding whitespace is ignored; the rest must be
    /// a 32-bit integer.
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        let trimmed = input.trim();
        let code = trimmed
            .parse::<i32>()
            .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;
        Self::from_code(code)
    }
}

pub fn write_menu(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n======================================")?;
    writeln!(out, "           ABCU Course Planner         ")?;
    writeln!(out, "======================================")?;
    writeln!(out, "1. Load Data Structure")?;
    writeln!(out, "2. Print Course List")?;
    writeln!(out, "3. Print Course")?;
    writeln!(out, "9. Exit")?;
    writeln!(out, "--------------------------------------")
}

/// Interactive session over an input source and an output sink.
pub struct Session<I: LineSource, W: Write> {
    catalog: Catalog,
    state: SessionState,
    input: I,
    out: W,
}

impl<I: LineSource, W: Write> Session<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self {
            catalog: Catalog::new(),
            state: SessionState::NotLoaded,
            input,
            out,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_parts(self) -> (Catalog, I, W) {
        (self.catalog, self.input, self.out)
    }

    /// Greet, then run menu iterations until exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{GREETING}")?;
        while self.step()?.is_continue() {}
        tracing::debug!("session finished");
        Ok(())
    }

    /// One menu iteration: show the menu, read a choice and act on it.
    pub fn step(&mut self) -> Result<ControlFlow<()>> {
        write_menu(&mut self.out)?;
        let Some(line) = self.prompt(CHOICE_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(ChoiceError::NotANumber(_)) => {
                writeln!(self.out, "{INVALID_INPUT}\n")?;
                return Ok(ControlFlow::Continue(()));
            }
            Err(ChoiceError::Unrecognized(code)) => {
                writeln!(
                    self.out,
                    "{code} is not a valid option. Please choose 1, 2, 3, or 9.\n"
                )?;
                return Ok(ControlFlow::Continue(()));
            }
        };
        tracing::debug!(code = choice.code(), state = ?self.state, "menu choice");

        match choice {
            MenuChoice::Load => return self.load(),
            MenuChoice::List => {
                if self.state == SessionState::NotLoaded {
                    writeln!(self.out, "{LOAD_FIRST}")?;
                } else {
                    write_course_list(&self.catalog, &mut self.out)?;
                }
            }
            MenuChoice::Detail => {
                if self.state == SessionState::NotLoaded {
                    writeln!(self.out, "{LOAD_FIRST}")?;
                } else {
                    return self.detail();
                }
            }
            MenuChoice::Exit => {
                writeln!(self.out, "{FAREWELL}")?;
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn load(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.out)?;
        let Some(path) = self.prompt(PATH_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.catalog.load_file(&path) {
            Ok(_) => writeln!(self.out, "Courses loaded successfully from {path}.")?,
            Err(err @ CatalogError::Open { .. }) => {
                tracing::warn!(error = %err, "load failed");
                writeln!(self.out, "{OPEN_FAILED}")?;
            }
            Err(err @ CatalogError::Read { .. }) => {
                tracing::warn!(error = %err, "load interrupted, catalog is partial");
                writeln!(self.out, "Courses loaded successfully from {path}.")?;
            }
        }

        // Set even when the open failed: the state only gates queries.
        self.state = SessionState::Loaded;
        Ok(ControlFlow::Continue(()))
    }

    fn detail(&mut self) -> Result<ControlFlow<()>> {
        let number = loop {
            let Some(line) = self.prompt(COURSE_PROMPT)? else {
                return Ok(ControlFlow::Break(()));
            };
            if let Some(token) = line.split_whitespace().next() {
                break token.to_string();
            }
        };

        write_course_detail(&self.catalog, &number, &mut self.out)?;
        Ok(ControlFlow::Continue(()))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.flush().context("flushing output before prompt")?;
        self.input.read_line(prompt)
    }
}
