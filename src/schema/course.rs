//! Course records

use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// A course offered by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
    /// Student identifiers supplied by the caller; never resolved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<String>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        code: impl Into<String>,
        credits: i32,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            code: code.into(),
            credits,
            instructor: instructor.into(),
            students: Vec::new(),
        }
    }

    pub fn with_students(mut self, students: Vec<String>) -> Self {
        self.students = students;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub instructor: Option<String>,
    pub students: Option<Vec<String>>,
}

impl Record for Course {
    type Patch = CoursePatch;

    const KIND: RecordKind = RecordKind::Course;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: CoursePatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(credits) = patch.credits {
            self.credits = credits;
        }
        if let Some(instructor) = patch.instructor {
            self.instructor = instructor;
        }
        if let Some(students) = patch.students {
            self.students = students;
        }
    }

    fn patched_id(patch: &CoursePatch) -> Option<&str> {
        patch.id.as_deref()
    }
}
