//! End-to-end resolver behavior through the GraphQL schema.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use roster::{build_schema, MemoryStore, RosterSchema, Store};
use serde_json::{json, Value};

fn seeded() -> (RosterSchema, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded());
    (build_schema(store.clone()), store)
}

async fn run(schema: &RosterSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).unwrap()
}

async fn run_with(schema: &RosterSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

fn error_message(response: &Value) -> &str {
    response["errors"][0]["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_get_all_returns_seed_in_order() {
    let (schema, _) = seeded();

    let response = run(&schema, "{ getAllStudent { id name email age major } }").await;
    assert_eq!(
        response["data"]["getAllStudent"],
        json!([
            {"id": "1", "name": "Ahmed Hassan", "email": "ahmed@iti.edu", "age": 22, "major": "Computer Science"},
            {"id": "2", "name": "Fatma Ali", "email": "fatma@iti.edu", "age": 21, "major": "Information Systems"}
        ])
    );

    let response = run(&schema, "{ getAllCourses { id title code credits instructor } }").await;
    assert_eq!(
        response["data"]["getAllCourses"],
        json!([
            {"id": "1", "title": "Data Structures", "code": "CS201", "credits": 3, "instructor": "Dr. Mohamed"},
            {"id": "2", "title": "Database Systems", "code": "CS301", "credits": 4, "instructor": "Dr. Sarah"}
        ])
    );
}

#[tokio::test]
async fn test_get_by_id_and_missing_is_null() {
    let (schema, _) = seeded();

    let response = run(&schema, r#"{ getCourse(id: "2") { title } getStudent(id: "99") { name } }"#).await;
    assert!(response["errors"].as_array().map_or(true, |e| e.is_empty()));
    assert_eq!(response["data"]["getCourse"]["title"], "Database Systems");
    assert_eq!(response["data"]["getStudent"], Value::Null);
}

#[tokio::test]
async fn test_search_students_by_major() {
    let (schema, _) = seeded();

    let response = run(&schema, r#"{ searchStudentsByMajor(major: "computer") { id major } }"#).await;
    assert_eq!(
        response["data"]["searchStudentsByMajor"],
        json!([{"id": "1", "major": "Computer Science"}])
    );

    let response = run(&schema, r#"{ searchStudentsByMajor(major: "nonexistent") { id } }"#).await;
    assert_eq!(response["data"]["searchStudentsByMajor"], json!([]));
}

#[tokio::test]
async fn test_search_with_empty_needle_skips_students_without_major() {
    let (schema, _) = seeded();
    run(
        &schema,
        r#"mutation { addStudent(input: {id: "3", name: "X", email: "x@y.z", age: 20}) { id } }"#,
    )
    .await;

    let response = run(&schema, r#"{ searchStudentsByMajor(major: "") { id } }"#).await;
    assert_eq!(response["data"]["searchStudentsByMajor"], json!([{"id": "1"}, {"id": "2"}]));
}

#[tokio::test]
async fn test_add_student_appends_last() {
    let (schema, store) = seeded();

    let response = run(
        &schema,
        r#"mutation { addStudent(input: {id: "3", name: "X", email: "x@y.z", age: 20}) { id name major } }"#,
    )
    .await;
    assert_eq!(
        response["data"]["addStudent"],
        json!({"id": "3", "name": "X", "major": null})
    );

    let students = store.all_students().unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[2].id, "3");

    let response = run(&schema, r#"{ getStudent(id: "3") { email age } }"#).await;
    assert_eq!(response["data"]["getStudent"], json!({"email": "x@y.z", "age": 20}));
}

#[tokio::test]
async fn test_add_course_with_variables() {
    let (schema, _) = seeded();

    let response = run_with(
        &schema,
        "mutation Add($input: CourseInput!) { addCourse(input: $input) { id code studentIds students { id } } }",
        json!({"input": {
            "id": "3", "title": "Operating Systems", "code": "CS401",
            "credits": 3, "instructor": "Dr. Karim", "students": ["1", "2"]
        }}),
    )
    .await;

    assert_eq!(
        response["data"]["addCourse"],
        json!({"id": "3", "code": "CS401", "studentIds": ["1", "2"], "students": []})
    );
}

#[tokio::test]
async fn test_add_duplicate_id_is_rejected() {
    let (schema, store) = seeded();

    let response = run(
        &schema,
        r#"mutation { addStudent(input: {id: "1", name: "Dup", email: "d@u.p", age: 30}) { id } }"#,
    )
    .await;
    assert_eq!(error_message(&response), "Student already exists: 1");
    assert_eq!(response["errors"][0]["extensions"]["code"], "DUPLICATE_ID");
    assert_eq!(store.all_students().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_student_merges_fields() {
    let (schema, _) = seeded();

    let response = run(
        &schema,
        r#"mutation { updateStudent(id: "1", input: {major: "Physics"}) { id name email age major } }"#,
    )
    .await;
    assert_eq!(
        response["data"]["updateStudent"],
        json!({"id": "1", "name": "Ahmed Hassan", "email": "ahmed@iti.edu", "age": 22, "major": "Physics"})
    );

    let response = run(&schema, r#"{ getStudent(id: "1") { major } }"#).await;
    assert_eq!(response["data"]["getStudent"]["major"], "Physics");
}

#[tokio::test]
async fn test_update_with_explicit_null_keeps_value() {
    let (schema, _) = seeded();

    let response = run(
        &schema,
        r#"mutation { updateCourse(id: "2", input: {credits: 5, title: null}) { title credits } }"#,
    )
    .await;
    assert_eq!(
        response["data"]["updateCourse"],
        json!({"title": "Database Systems", "credits": 5})
    );
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let (schema, store) = seeded();

    let response = run(
        &schema,
        r#"mutation { updateStudent(id: "nope", input: {age: 30}) { id } }"#,
    )
    .await;
    assert_eq!(error_message(&response), "Student not found: nope");
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(store.all_students().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_course_removes_it() {
    let (schema, _) = seeded();

    let response = run(&schema, r#"mutation { deleteCourse(id: "1") { id title } }"#).await;
    assert_eq!(
        response["data"]["deleteCourse"],
        json!({"id": "1", "title": "Data Structures"})
    );

    let response = run(&schema, r#"{ getCourse(id: "1") { id } getAllCourses { id } }"#).await;
    assert_eq!(response["data"]["getCourse"], Value::Null);
    assert_eq!(response["data"]["getAllCourses"], json!([{"id": "2"}]));
}

#[tokio::test]
async fn test_delete_missing_student_leaves_collection_unchanged() {
    let (schema, store) = seeded();
    let before = store.all_students().unwrap();

    let response = run(&schema, r#"mutation { deleteStudent(id: "nonexistent-id") { id } }"#).await;
    assert_eq!(error_message(&response), "Student not found: nonexistent-id");
    assert_eq!(response["data"], Value::Null);
    assert_eq!(store.all_students().unwrap(), before);
}

#[tokio::test]
async fn test_delete_missing_course_is_not_found() {
    let (schema, store) = seeded();
    let before = store.all_courses().unwrap();

    let response = run(&schema, r#"mutation { deleteCourse(id: "nonexistent") { id } }"#).await;
    assert_eq!(error_message(&response), "Course not found: nonexistent");
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(response["data"], Value::Null);
    assert_eq!(store.all_courses().unwrap(), before);
}

#[tokio::test]
async fn test_relationship_fields_resolve_empty() {
    let (schema, _) = seeded();

    let response = run(
        &schema,
        r#"{ getStudent(id: "1") { courses { id } courseIds } getCourse(id: "1") { students { id } studentIds } }"#,
    )
    .await;
    assert_eq!(
        response["data"],
        json!({
            "getStudent": {"courses": [], "courseIds": []},
            "getCourse": {"students": [], "studentIds": []}
        })
    );
}

#[tokio::test]
async fn test_missing_required_input_field_is_a_type_error() {
    let (schema, store) = seeded();

    let response = run(
        &schema,
        r#"mutation { addStudent(input: {id: "3", name: "X", age: 20}) { id } }"#,
    )
    .await;
    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.all_students().unwrap().len(), 2);
}

#[tokio::test]
async fn test_stores_are_isolated() {
    let (first, _) = seeded();
    let (second, _) = seeded();

    run(&first, r#"mutation { deleteStudent(id: "1") { id } }"#).await;

    let response = run(&second, "{ getAllStudent { id } }").await;
    assert_eq!(response["data"]["getAllStudent"], json!([{"id": "1"}, {"id": "2"}]));
}

#[test]
fn test_sdl_declares_operations() {
    let (schema, _) = seeded();
    let sdl = schema.sdl();

    for field in [
        "getAllStudent",
        "getAllCourses",
        "getStudent(id: ID!): Student",
        "getCourse(id: ID!): Course",
        "searchStudentsByMajor(major: String!)",
        "addStudent(input: StudentInput!): Student!",
        "addCourse(input: CourseInput!): Course!",
        "updateStudent(input: StudentInputUpdate!, id: ID!): Student!",
        "updateCourse(input: CourseInputUpdate!, id: ID!): Course!",
        "deleteStudent(id: ID!): Student!",
        "deleteCourse(id: ID!): Course!",
    ] {
        assert!(sdl.contains(field), "missing {field} in SDL:\n{sdl}");
    }
}
