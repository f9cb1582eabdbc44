//! Registry record types
//!
//! This module defines the records held by the registry:
//! - [`Student`]: an enrolled student, patched through [`StudentPatch`]
//! - [`Course`]: an offered course, patched through [`CoursePatch`]
//! - [`Record`]: the shared shape a collection needs to store either one

mod student;
mod course;

pub use student::{Student, StudentPatch};
pub use course::{Course, CoursePatch};

/// Which collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Student,
    Course,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Student => write!(f, "Student"),
            RecordKind::Course => write!(f, "Course"),
        }
    }
}

/// A record addressable by a caller-supplied identifier
pub trait Record: Clone {
    /// Partial update accepted by [`Record::apply`]
    type Patch;

    const KIND: RecordKind;

    fn id(&self) -> &str;

    /// Overwrite every field the patch carries, keep the rest
    fn apply(&mut self, patch: Self::Patch);

    /// The identifier the record will have after `patch` is applied, if it changes it
    fn patched_id(patch: &Self::Patch) -> Option<&str>;
}
