use async_graphql::{Context, Object, Result, ID};
use crate::store::{MemoryStore, Store};
use super::store_error;
use super::types::{Course, Student};
use std::sync::Arc;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every course, in insertion order
    async fn get_all_courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let courses = store.all_courses().map_err(store_error)?;
        Ok(courses.into_iter().map(Into::into).collect())
    }

    /// Look up a course by ID
    async fn get_course(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let course = store.get_course(&id).map_err(store_error)?;
        Ok(course.map(Into::into))
    }

    /// Every student, in insertion order
    async fn get_all_student(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let students = store.all_students().map_err(store_error)?;
        Ok(students.into_iter().map(Into::into).collect())
    }

    /// Look up a student by ID
    async fn get_student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let student = store.get_student(&id).map_err(store_error)?;
        Ok(student.map(Into::into))
    }

    /// Students whose major contains the given text, ignoring case
    async fn search_students_by_major(
        &self,
        ctx: &Context<'_>,
        major: String,
    ) -> Result<Vec<Student>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        let students = store.search_students_by_major(&major).map_err(store_error)?;
        Ok(students.into_iter().map(Into::into).collect())
    }
}
