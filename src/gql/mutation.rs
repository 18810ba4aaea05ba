//! GraphQL mutation resolvers.
//!
//! Updates and enrollment changes read the current document and then
//! write the new field values back. The two calls are not atomic, so a
//! concurrent change to the same document between them is overwritten.

use async_graphql::{Context, ID, MaybeUndefined, Object, Result};

use super::schema::Collections;
use super::types::{Course, Student, Teacher};
use crate::dbs::Id;
use crate::err::Error;
use crate::model::{self, CoursePatch, EnrollmentPatch, ProfilePatch};

/// Root mutation type for the GraphQL schema.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
	/// Create a student with no enrolled courses.
	async fn create_student(&self, ctx: &Context<'_>, name: String, email: String) -> Result<Student> {
		let db = ctx.data::<Collections>()?;
		let student = db.students.insert(model::Student::new(name, email)).await?;
		debug!("Created student {}", student.id);
		Ok(student.into())
	}

	/// Create a teacher with no courses taught.
	async fn create_teacher(&self, ctx: &Context<'_>, name: String, email: String) -> Result<Teacher> {
		let db = ctx.data::<Collections>()?;
		let teacher = db.teachers.insert(model::Teacher::new(name, email)).await?;
		debug!("Created teacher {}", teacher.id);
		Ok(teacher.into())
	}

	/// Create a course with no enrolled students.
	async fn create_course(
		&self,
		ctx: &Context<'_>,
		title: String,
		description: String,
		teacher_id: String,
	) -> Result<Course> {
		let db = ctx.data::<Collections>()?;
		let course = db.courses.insert(model::Course::new(title, description, teacher_id)).await?;
		debug!("Created course {}", course.id);
		Ok(course.into())
	}

	/// Change the name or email of a student. Omitted fields keep their value.
	async fn update_student(
		&self,
		ctx: &Context<'_>,
		id: ID,
		name: MaybeUndefined<String>,
		email: MaybeUndefined<String>,
	) -> Result<Student> {
		let db = ctx.data::<Collections>()?;
		let id: Id = id.parse()?;
		let student = db.students.find_one(&id).await?.ok_or(Error::NotFound)?;
		let patch = ProfilePatch {
			name: or_current(name, &student.name),
			email: or_current(email, &student.email),
		};
		let student = db.students.update_one(&id, &patch).await?.ok_or(Error::NotFound)?;
		debug!("Updated student {id}");
		Ok(student.into())
	}

	/// Change the name or email of a teacher. Omitted fields keep their value.
	async fn update_teacher(
		&self,
		ctx: &Context<'_>,
		id: ID,
		name: MaybeUndefined<String>,
		email: MaybeUndefined<String>,
	) -> Result<Teacher> {
		let db = ctx.data::<Collections>()?;
		let id: Id = id.parse()?;
		let teacher = db.teachers.find_one(&id).await?.ok_or(Error::NotFound)?;
		let patch = ProfilePatch {
			name: or_current(name, &teacher.name),
			email: or_current(email, &teacher.email),
		};
		let teacher = db.teachers.update_one(&id, &patch).await?.ok_or(Error::NotFound)?;
		debug!("Updated teacher {id}");
		Ok(teacher.into())
	}

	/// Change the title, description or teacher of a course. Omitted
	/// fields keep their value.
	async fn update_course(
		&self,
		ctx: &Context<'_>,
		id: ID,
		title: MaybeUndefined<String>,
		description: MaybeUndefined<String>,
		teacher_id: MaybeUndefined<String>,
	) -> Result<Course> {
		let db = ctx.data::<Collections>()?;
		let id: Id = id.parse()?;
		let course = db.courses.find_one(&id).await?.ok_or(Error::NotFound)?;
		let patch = CoursePatch {
			title: or_current(title, &course.title),
			description: or_current(description, &course.description),
			teacher_id: or_current(teacher_id, &course.teacher_id),
		};
		let course = db.courses.update_one(&id, &patch).await?.ok_or(Error::NotFound)?;
		debug!("Updated course {id}");
		Ok(course.into())
	}

	/// Delete a student. Courses listing the student are left untouched.
	async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
		let db = ctx.data::<Collections>()?;
		let id: Id = id.parse()?;
		Ok(db.students.delete_one(&id).await?)
	}

	/// Delete a teacher. Courses referencing the teacher are left untouched.
	async fn delete_teacher(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
		let db = ctx.data::<Collections>()?;
		let id: Id = id.parse()?;
		Ok(db.teachers.delete_one(&id).await?)
	}

	/// Delete a course.
	async fn delete_course(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
		let db = ctx.data::<Collections>()?;
		let id: Id = id.parse()?;
		Ok(db.courses.delete_one(&id).await?)
	}

	/// Add a student to a course. The student is appended even when
	/// already enrolled, and is not checked against the students collection.
	async fn enroll_student_in_course(
		&self,
		ctx: &Context<'_>,
		student_id: ID,
		course_id: ID,
	) -> Result<Course> {
		let db = ctx.data::<Collections>()?;
		let course_id: Id = course_id.parse()?;
		let mut course = db.courses.find_one(&course_id).await?.ok_or(Error::NotFound)?;
		course.enroll(student_id.0);
		let patch = EnrollmentPatch {
			student_ids: &course.student_ids,
		};
		let course = db.courses.update_one(&course_id, &patch).await?.ok_or(Error::NotFound)?;
		debug!("Enrolled a student in course {course_id}");
		Ok(course.into())
	}

	/// Remove one enrollment of a student from a course. Succeeds without
	/// change when the student is not enrolled.
	async fn remove_student_from_course(
		&self,
		ctx: &Context<'_>,
		student_id: ID,
		course_id: ID,
	) -> Result<Course> {
		let db = ctx.data::<Collections>()?;
		let course_id: Id = course_id.parse()?;
		let mut course = db.courses.find_one(&course_id).await?.ok_or(Error::NotFound)?;
		if !course.unenroll(&student_id) {
			trace!("Student {} is not enrolled in course {course_id}", student_id.as_str());
		}
		let patch = EnrollmentPatch {
			student_ids: &course.student_ids,
		};
		let course = db.courses.update_one(&course_id, &patch).await?.ok_or(Error::NotFound)?;
		debug!("Removed a student from course {course_id}");
		Ok(course.into())
	}
}

/// Use the supplied value, or keep the current one when the argument
/// was omitted or null. An empty string counts as a supplied value.
fn or_current(value: MaybeUndefined<String>, current: &str) -> String {
	match value {
		MaybeUndefined::Value(v) => v,
		MaybeUndefined::Null | MaybeUndefined::Undefined => current.to_owned(),
	}
}
