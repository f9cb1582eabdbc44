use async_graphql::{Context, Object, Result, ID};
use crate::store::{MemoryStore, Store};
use super::store_error;
use super::types::{Course, CourseInput, CourseInputUpdate, Student, StudentInput, StudentInputUpdate};
use std::sync::Arc;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Append a new student
    async fn add_student(&self, ctx: &Context<'_>, input: StudentInput) -> Result<Student> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let created = store.add_student(input.into()).map_err(store_error)?;
        Ok(created.into())
    }

    /// Append a new course
    async fn add_course(&self, ctx: &Context<'_>, input: CourseInput) -> Result<Course> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let created = store.add_course(input.into()).map_err(store_error)?;
        Ok(created.into())
    }

    /// Merge the supplied fields into an existing student
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        input: StudentInputUpdate,
        id: ID,
    ) -> Result<Student> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let updated = store.update_student(&id, input.into()).map_err(store_error)?;
        Ok(updated.into())
    }

    /// Remove a student, returning it
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<Student> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let deleted = store.delete_student(&id).map_err(store_error)?;
        Ok(deleted.into())
    }

    /// Merge the supplied fields into an existing course
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        input: CourseInputUpdate,
        id: ID,
    ) -> Result<Course> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let updated = store.update_course(&id, input.into()).map_err(store_error)?;
        Ok(updated.into())
    }

    /// Remove a course, returning it
    async fn delete_course(&self, ctx: &Context<'_>, id: ID) -> Result<Course> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let deleted = store.delete_course(&id).map_err(store_error)?;
        Ok(deleted.into())
    }
}
