//! GraphQL query resolvers.
//!
//! A lookup by identifier which matches nothing resolves to `null`
//! rather than an error. A lookup which fails also resolves to `null`,
//! with the error recorded against that field alone.

use async_graphql::{Context, ID, Object, Result};

use super::schema::Collections;
use super::types::{Course, Student, Teacher};
use crate::dbs::{Id, Table};
use crate::err::Error;
use crate::model::{Document, Entity};

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
	/// Every student, in store order.
	async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
		let db = ctx.data::<Collections>()?;
		let students = db.students.find().await?;
		Ok(students.into_iter().map(Student::from).collect())
	}

	/// A single student, or null if none has this identifier.
	async fn student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
		let db = ctx.data::<Collections>()?;
		let found = lookup(&db.students, &id).await;
		Ok(field_error(ctx, found).map(Student::from))
	}

	/// Every teacher, in store order.
	async fn teachers(&self, ctx: &Context<'_>) -> Result<Vec<Teacher>> {
		let db = ctx.data::<Collections>()?;
		let teachers = db.teachers.find().await?;
		Ok(teachers.into_iter().map(Teacher::from).collect())
	}

	/// A single teacher, or null if none has this identifier.
	async fn teacher(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Teacher>> {
		let db = ctx.data::<Collections>()?;
		let found = lookup(&db.teachers, &id).await;
		Ok(field_error(ctx, found).map(Teacher::from))
	}

	/// Every course, in store order.
	async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
		let db = ctx.data::<Collections>()?;
		let courses = db.courses.find().await?;
		Ok(courses.into_iter().map(Course::from).collect())
	}

	/// A single course, or null if none has this identifier.
	async fn course(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
		let db = ctx.data::<Collections>()?;
		let found = lookup(&db.courses, &id).await;
		Ok(field_error(ctx, found).map(Course::from))
	}
}

async fn lookup<T: Entity>(table: &Table<T>, id: &ID) -> Result<Option<Document<T>>, Error> {
	let id: Id = id.parse()?;
	table.find_one(&id).await
}

/// Record a failed lookup as an error on the current field, leaving
/// sibling fields to resolve on their own
fn field_error<T>(ctx: &Context<'_>, res: Result<Option<T>, Error>) -> Option<T> {
	match res {
		Ok(v) => v,
		Err(e) => {
			let err = async_graphql::Error::from(e).into_server_error(ctx.item.pos);
			ctx.add_error(ctx.set_error_path(err));
			None
		}
	}
}
