use crate::error::RecordError;
use std::fmt;

/// Field separator of the catalog input format.
pub const DELIMITER: char = ',';

/// A single catalog entry.
///
/// `number` is the unique key of the catalog and is kept exactly as it
/// appeared in the source, including its casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course identifier, e.g. `CSCI101`.
    pub number: String,
    /// Free-text course title.
    pub name: String,
    /// Prerequisite identifiers in source order. Never contains empty strings.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Builder-style helper mostly useful in tests.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }
}

/// `<number>, <name>`, the summary form used by both queries.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.name)
    }
}

/// Splits a line into fields the way a stream `getline` loop does.
///
/// Interior empty fields are kept, but a trailing delimiter does not start
/// one more (empty) field: `"A,B,"` gives `["A", "B"]`.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parses one line of catalog input into a [`Course`].
///
/// Field 0 is the course number, field 1 the name and every non-empty field
/// after that a prerequisite. Nothing is trimmed and no quoting is recognised.
pub fn parse_record(line: &str) -> Result<Course, RecordError> {
    if line.is_empty() {
        return Err(RecordError::EmptyLine);
    }

    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(RecordError::TooFewFields {
            found: fields.len(),
        });
    }

    let prerequisites = fields[2..]
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| f.to_string())
        .collect();

    Ok(Course {
        number: fields[0].to_string(),
        name: fields[1].to_string(),
        prerequisites,
    })
}
