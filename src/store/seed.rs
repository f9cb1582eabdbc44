//! Initial collection contents

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{StoreError, StoreResult};
use crate::schema::{Course, Student};

/// Records loaded into a fresh store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Seed {
    pub fn empty() -> Self {
        Self {
            students: Vec::new(),
            courses: Vec::new(),
        }
    }

    /// Read a JSON seed file of the form `{"students": [...], "courses": [...]}`
    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| StoreError::Seed {
            path: path.to_path_buf(),
            source,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| wrap(Box::new(e)))?;
        serde_json::from_str(&raw).map_err(|e| wrap(Box::new(e)))
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            students: vec![
                Student::new("1", "Ahmed Hassan", "ahmed@iti.edu", 22)
                    .with_major("Computer Science"),
                Student::new("2", "Fatma Ali", "fatma@iti.edu", 21)
                    .with_major("Information Systems"),
            ],
            courses: vec![
                Course::new("1", "Data Structures", "CS201", 3, "Dr. Mohamed"),
                Course::new("2", "Database Systems", "CS301", 4, "Dr. Sarah"),
            ],
        }
    }
}
