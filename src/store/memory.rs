//! In-memory store

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use super::{Seed, Store, StoreError, StoreResult};
use crate::schema::{Course, CoursePatch, Record, Student, StudentPatch};

/// Ordered records of one kind, unique by id.
#[derive(Debug, Clone)]
struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn insert(&mut self, record: T) -> StoreResult<&T> {
        if self.position(record.id()).is_some() {
            return Err(StoreError::duplicate_id(T::KIND, record.id()));
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    fn update(&mut self, id: &str, patch: T::Patch) -> StoreResult<&T> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))?;

        if let Some(new_id) = T::patched_id(&patch) {
            if new_id != id && self.position(new_id).is_some() {
                return Err(StoreError::duplicate_id(T::KIND, new_id));
            }
        }

        let record = &mut self.records[index];
        record.apply(patch);
        Ok(&*record)
    }

    fn remove(&mut self, id: &str) -> StoreResult<T> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        Ok(self.records.remove(index))
    }
}

impl<T: Record> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

#[derive(Debug)]
struct Collections {
    students: Collection<Student>,
    courses: Collection<Course>,
}

/// Process-local store; one writer at a time, readers in parallel
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create a store with no records
    pub fn new() -> Self {
        Self::with_collections(Collection::new(), Collection::new())
    }

    /// Create a store holding the built-in seed records
    pub fn seeded() -> Self {
        let seed = Seed::default();
        Self::seeded_with(seed.students.into(), seed.courses.into())
    }

    /// Create a store from caller-provided records, rejecting duplicate ids
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        let mut students = Collection::new();
        for student in seed.students {
            students.insert(student)?;
        }
        let mut courses = Collection::new();
        for course in seed.courses {
            courses.insert(course)?;
        }

        Ok(Self::seeded_with(students, courses))
    }

    fn seeded_with(students: Collection<Student>, courses: Collection<Course>) -> Self {
        info!(
            students = students.records.len(),
            courses = courses.records.len(),
            "store seeded"
        );
        Self::with_collections(students, courses)
    }

    fn with_collections(students: Collection<Student>, courses: Collection<Course>) -> Self {
        Self {
            inner: RwLock::new(Collections { students, courses }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collections>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collections>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn all_students(&self) -> StoreResult<Vec<Student>> {
        Ok(self.read()?.students.records.clone())
    }

    fn all_courses(&self) -> StoreResult<Vec<Course>> {
        Ok(self.read()?.courses.records.clone())
    }

    fn get_student(&self, id: &str) -> StoreResult<Option<Student>> {
        Ok(self.read()?.students.get(id).cloned())
    }

    fn get_course(&self, id: &str) -> StoreResult<Option<Course>> {
        Ok(self.read()?.courses.get(id).cloned())
    }

    fn search_students_by_major(&self, major: &str) -> StoreResult<Vec<Student>> {
        let guard = self.read()?;
        let matches: Vec<Student> = guard
            .students
            .records
            .iter()
            .filter(|s| s.major_contains(major))
            .cloned()
            .collect();
        debug!(major, matches = matches.len(), "searched students by major");
        Ok(matches)
    }

    fn add_student(&self, student: Student) -> StoreResult<Student> {
        let mut guard = self.write()?;
        let added = guard.students.insert(student).map_err(|e| {
            warn!(error = %e, "rejected student");
            e
        })?;
        debug!(id = %added.id, "student added");
        Ok(added.clone())
    }

    fn add_course(&self, course: Course) -> StoreResult<Course> {
        let mut guard = self.write()?;
        let added = guard.courses.insert(course).map_err(|e| {
            warn!(error = %e, "rejected course");
            e
        })?;
        debug!(id = %added.id, "course added");
        Ok(added.clone())
    }

    fn update_student(&self, id: &str, patch: StudentPatch) -> StoreResult<Student> {
        let mut guard = self.write()?;
        let updated = guard.students.update(id, patch).map_err(|e| {
            warn!(id, error = %e, "student update rejected");
            e
        })?;
        debug!(id, "student updated");
        Ok(updated.clone())
    }

    fn update_course(&self, id: &str, patch: CoursePatch) -> StoreResult<Course> {
        let mut guard = self.write()?;
        let updated = guard.courses.update(id, patch).map_err(|e| {
            warn!(id, error = %e, "course update rejected");
            e
        })?;
        debug!(id, "course updated");
        Ok(updated.clone())
    }

    fn delete_student(&self, id: &str) -> StoreResult<Student> {
        let removed = self.write()?.students.remove(id)?;
        info!(id, "student deleted");
        Ok(removed)
    }

    fn delete_course(&self, id: &str) -> StoreResult<Course> {
        let removed = self.write()?.courses.remove(id)?;
        info!(course = ?removed, "course deleted");
        Ok(removed)
    }
}
