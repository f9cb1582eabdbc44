//! Collection storage for the registry
//!
//! [`Store`] is the seam the GraphQL resolvers talk to; [`MemoryStore`] keeps
//! both collections in process memory behind a single lock.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::Seed;

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::{Course, CoursePatch, RecordKind, Student, StudentPatch};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("{kind} already exists: {id}")]
    DuplicateId { kind: RecordKind, id: String },

    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Failed to load seed file {}: {source}", .path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn duplicate_id(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Operations over the student and course collections.
///
/// Reads hand back owned copies in insertion order. Writes either succeed
/// completely or leave both collections untouched.
pub trait Store: Send + Sync {
    fn all_students(&self) -> StoreResult<Vec<Student>>;

    fn all_courses(&self) -> StoreResult<Vec<Course>>;

    fn get_student(&self, id: &str) -> StoreResult<Option<Student>>;

    fn get_course(&self, id: &str) -> StoreResult<Option<Course>>;

    /// Students whose major contains `major`, ignoring case
    fn search_students_by_major(&self, major: &str) -> StoreResult<Vec<Student>>;

    /// Append a student; rejects an id already in use
    fn add_student(&self, student: Student) -> StoreResult<Student>;

    /// Append a course; rejects an id already in use
    fn add_course(&self, course: Course) -> StoreResult<Course>;

    fn update_student(&self, id: &str, patch: StudentPatch) -> StoreResult<Student>;

    fn update_course(&self, id: &str, patch: CoursePatch) -> StoreResult<Course>;

    fn delete_student(&self, id: &str) -> StoreResult<Student>;

    fn delete_course(&self, id: &str) -> StoreResult<Course>;
}
