#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Response, Variables};
use school_gql::{AppSchema, MemoryStore, create_schema};
use serde_json::Value;

/// A schema over a fresh, empty in-process store
pub fn schema() -> AppSchema {
	create_schema(Arc::new(MemoryStore::new()))
}

/// Execute a request, returning the raw GraphQL response
pub async fn execute(schema: &AppSchema, query: &str, variables: Value) -> Response {
	let req = Request::new(query).variables(Variables::from_json(variables));
	schema.execute(req).await
}

/// Execute a request which is expected to succeed, returning its data
pub async fn data(schema: &AppSchema, query: &str, variables: Value) -> Value {
	let res = execute(schema, query, variables).await;
	assert!(res.errors.is_empty(), "errors: {:?}", res.errors);
	res.data.into_json().expect("response data should be valid JSON")
}

pub const STUDENT_FIELDS: &str = "id name email enrolledCourses";

pub const TEACHER_FIELDS: &str = "id name email coursesTaught";

pub const COURSE_FIELDS: &str = "id title description teacherId studentIds";

pub async fn create_student(schema: &AppSchema, name: &str, email: &str) -> Value {
	let query = format!(
		"mutation($name: String!, $email: String!) {{ createStudent(name: $name, email: $email) {{ {STUDENT_FIELDS} }} }}"
	);
	let data = data(schema, &query, serde_json::json!({ "name": name, "email": email })).await;
	data["createStudent"].clone()
}

pub async fn create_teacher(schema: &AppSchema, name: &str, email: &str) -> Value {
	let query = format!(
		"mutation($name: String!, $email: String!) {{ createTeacher(name: $name, email: $email) {{ {TEACHER_FIELDS} }} }}"
	);
	let data = data(schema, &query, serde_json::json!({ "name": name, "email": email })).await;
	data["createTeacher"].clone()
}

pub async fn create_course(
	schema: &AppSchema,
	title: &str,
	description: &str,
	teacher_id: &str,
) -> Value {
	let query = format!(
		"mutation($title: String!, $description: String!, $teacherId: String!) {{ createCourse(title: $title, description: $description, teacherId: $teacherId) {{ {COURSE_FIELDS} }} }}"
	);
	let variables = serde_json::json!({
		"title": title,
		"description": description,
		"teacherId": teacher_id,
	});
	let data = data(schema, &query, variables).await;
	data["createCourse"].clone()
}

pub async fn enroll(schema: &AppSchema, student_id: &str, course_id: &str) -> Value {
	let query = format!(
		"mutation($s: ID!, $c: ID!) {{ enrollStudentInCourse(studentId: $s, courseId: $c) {{ {COURSE_FIELDS} }} }}"
	);
	let data = data(schema, &query, serde_json::json!({ "s": student_id, "c": course_id })).await;
	data["enrollStudentInCourse"].clone()
}

pub async fn unenroll(schema: &AppSchema, student_id: &str, course_id: &str) -> Value {
	let query = format!(
		"mutation($s: ID!, $c: ID!) {{ removeStudentFromCourse(studentId: $s, courseId: $c) {{ {COURSE_FIELDS} }} }}"
	);
	let data = data(schema, &query, serde_json::json!({ "s": student_id, "c": course_id })).await;
	data["removeStudentFromCourse"].clone()
}

pub async fn course(schema: &AppSchema, id: &str) -> Value {
	let query = format!("query($id: ID!) {{ course(id: $id) {{ {COURSE_FIELDS} }} }}");
	let data = data(schema, &query, serde_json::json!({ "id": id })).await;
	data["course"].clone()
}

/// The `id` field of an entity as a string
pub fn id(entity: &Value) -> String {
	entity["id"].as_str().expect("entity should have a string id").to_owned()
}
