//! Student records

use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// A student in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Caller-supplied identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    /// Declared major, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    /// Course identifiers supplied by the caller; never resolved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<String>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            age,
            major: None,
            courses: Vec::new(),
        }
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn with_courses(mut self, courses: Vec<String>) -> Self {
        self.courses = courses;
        self
    }

    /// Case-insensitive substring match against the major.
    ///
    /// Students without a major never match, even for an empty needle.
    pub fn major_contains(&self, needle: &str) -> bool {
        match &self.major {
            Some(major) => major.to_lowercase().contains(&needle.to_lowercase()),
            None => false,
        }
    }
}

/// Partial student update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub courses: Option<Vec<String>>,
}

impl Record for Student {
    type Patch = StudentPatch;

    const KIND: RecordKind = RecordKind::Student;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: StudentPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(major) = patch.major {
            self.major = Some(major);
        }
        if let Some(courses) = patch.courses {
            self.courses = courses;
        }
    }

    fn patched_id(patch: &StudentPatch) -> Option<&str> {
        patch.id.as_deref()
    }
}
