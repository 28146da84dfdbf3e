use crate::error::CatalogError;
use crate::record::{Course, parse_record};
use std::collections::HashMap;
use std::collections::hash_map::Keys;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// In-memory course catalog keyed by course number.
///
/// Keys are stored exactly as loaded. Iteration order of [`Catalog::keys`] is
/// unspecified; use [`Catalog::sorted_keys`] for presentation.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Path the records were read from.
    pub path: PathBuf,
    /// Number of records in the store after the load.
    pub stored: usize,
    /// Number of lines rejected by the record parser.
    pub skipped: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.courses.clear();
    }

    /// Insert a course, replacing any record with the same number entirely.
    ///
    /// Returns the replaced record.
    pub fn insert(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.number.clone(), course)
    }

    pub fn get(&self, number: &str) -> Option<&Course> {
        self.courses.get(number)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.courses.contains_key(number)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn keys(&self) -> Keys<'_, String, Course> {
        self.courses.keys()
    }

    /// All course numbers in ascending byte order (case-sensitive).
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.courses.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Replace the catalog contents with the records in the file at `path`.
    ///
    /// The file is opened before anything is touched: if that fails the
    /// current contents are kept and [`CatalogError::Open`] is returned.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "loading course catalog");
        let (stored, skipped) = self
            .load_from_reader(BufReader::new(file))
            .map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), stored, skipped, "course catalog loaded");

        Ok(LoadReport {
            path: path.to_path_buf(),
            stored,
            skipped,
        })
    }

    /// Clear the catalog and fill it from `reader`, one record per line.
    ///
    /// Rejected lines are dropped. Returns `(stored, skipped)`. On a read
    /// error the records parsed so far stay in the catalog.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<(usize, usize)> {
        self.clear();

        let mut skipped = 0;
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }

            let line = String::from_utf8_lossy(&buf);
            match parse_record(&line) {
                Ok(course) => {
                    if let Some(previous) = self.insert(course) {
                        tracing::debug!(line = line_no, number = %previous.number, "course overwritten");
                    }
                }
                Err(err) => {
                    skipped += 1;
                    tracing::debug!(line = line_no, %err, "line skipped");
                }
            }
        }

        Ok((self.len(), skipped))
    }
}
