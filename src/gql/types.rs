//! GraphQL type definitions.
//!
//! These are the API representations returned to clients. They carry
//! the same fields as the stored shapes, with the identifier rendered
//! as a string.

use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone, Debug, Eq, PartialEq)]
pub struct Student {
	pub id: ID,
	pub name: String,
	pub email: String,
	/// Course identifiers. Never populated by any mutation.
	pub enrolled_courses: Vec<String>,
}

#[derive(SimpleObject, Clone, Debug, Eq, PartialEq)]
pub struct Teacher {
	pub id: ID,
	pub name: String,
	pub email: String,
	/// Course identifiers. Never populated by any mutation.
	pub courses_taught: Vec<String>,
}

#[derive(SimpleObject, Clone, Debug, Eq, PartialEq)]
pub struct Course {
	pub id: ID,
	pub title: String,
	pub description: String,
	/// The identifier of the teacher giving this course.
	pub teacher_id: String,
	/// Identifiers of the enrolled students, in enrollment order.
	pub student_ids: Vec<String>,
}
