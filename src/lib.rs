//! ABCU course planner.
//!
//! Loads course records (`number,name[,prerequisite...]`) from a comma
//! delimited file into an in-memory [`Catalog`] and answers two queries
//! through a numbered text menu: the full course list in course-number order,
//! and the details of a single course with its prerequisites.
//!
//! The main entry point is [`Session`], which drives the menu over any
//! [`LineSource`] and output sink. The [`record`], [`catalog`] and [`query`]
//! modules can also be used on their own.

pub mod catalog;
pub mod console;
pub mod error;
pub mod query;
pub mod record;
pub mod session;

pub use catalog::{Catalog, LoadReport};
pub use console::{Console, LineSource, ScriptedInput};
pub use error::{CatalogError, ChoiceError, RecordError};
pub use record::{Course, parse_record};
pub use session::{MenuChoice, Session, SessionState};
