use async_graphql::{ComplexObject, InputObject, SimpleObject, ID};

use crate::schema as domain;

/// A student as seen by GraphQL clients
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Student {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub major: Option<String>,
    /// Course identifiers recorded on the student
    pub course_ids: Vec<ID>,
}

#[ComplexObject]
impl Student {
    /// Enrolled courses. Enrollment is not resolved, so this is always empty.
    async fn courses(&self) -> Vec<Course> {
        Vec::new()
    }
}

impl From<domain::Student> for Student {
    fn from(s: domain::Student) -> Self {
        Self {
            id: ID(s.id),
            name: s.name,
            email: s.email,
            age: s.age,
            major: s.major,
            course_ids: s.courses.into_iter().map(ID).collect(),
        }
    }
}

/// A course as seen by GraphQL clients
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Course {
    pub id: ID,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
    /// Student identifiers recorded on the course
    pub student_ids: Vec<ID>,
}

#[ComplexObject]
impl Course {
    /// Enrolled students. Enrollment is not resolved, so this is always empty.
    async fn students(&self) -> Vec<Student> {
        Vec::new()
    }
}

impl From<domain::Course> for Course {
    fn from(c: domain::Course) -> Self {
        Self {
            id: ID(c.id),
            title: c.title,
            code: c.code,
            credits: c.credits,
            instructor: c.instructor,
            student_ids: c.students.into_iter().map(ID).collect(),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// INPUTS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(InputObject, Debug)]
pub struct StudentInput {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub major: Option<String>,
    pub courses: Option<Vec<ID>>,
}

impl From<StudentInput> for domain::Student {
    fn from(input: StudentInput) -> Self {
        Self {
            id: input.id.0,
            name: input.name,
            email: input.email,
            age: input.age,
            major: input.major,
            courses: ids_to_strings(input.courses.unwrap_or_default()),
        }
    }
}

#[derive(InputObject, Debug)]
pub struct CourseInput {
    pub id: ID,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
    pub students: Option<Vec<ID>>,
}

impl From<CourseInput> for domain::Course {
    fn from(input: CourseInput) -> Self {
        Self {
            id: input.id.0,
            title: input.title,
            code: input.code,
            credits: input.credits,
            instructor: input.instructor,
            students: ids_to_strings(input.students.unwrap_or_default()),
        }
    }
}

/// Partial student update; omitted or null fields keep their current value
#[derive(InputObject, Debug, Default)]
pub struct StudentInputUpdate {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub courses: Option<Vec<ID>>,
}

impl From<StudentInputUpdate> for domain::StudentPatch {
    fn from(input: StudentInputUpdate) -> Self {
        Self {
            id: input.id.map(|id| id.0),
            name: input.name,
            email: input.email,
            age: input.age,
            major: input.major,
            courses: input.courses.map(ids_to_strings),
        }
    }
}

/// Partial course update; omitted or null fields keep their current value
#[derive(InputObject, Debug, Default)]
pub struct CourseInputUpdate {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub instructor: Option<String>,
    pub students: Option<Vec<ID>>,
}

impl From<CourseInputUpdate> for domain::CoursePatch {
    fn from(input: CourseInputUpdate) -> Self {
        Self {
            id: input.id.map(|id| id.0),
            title: input.title,
            code: input.code,
            credits: input.credits,
            instructor: input.instructor,
            students: input.students.map(ids_to_strings),
        }
    }
}

fn ids_to_strings(ids: Vec<ID>) -> Vec<String> {
    ids.into_iter().map(|id| id.0).collect()
}
