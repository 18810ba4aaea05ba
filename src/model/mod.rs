//! The stored shapes of each entity.
//!
//! Bodies are persisted with camelCase field names. The identifier is
//! never part of a body; it travels alongside it in a [`Document`].

mod course;
mod person;

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dbs::{Collection, Id};

pub use course::{Course, CoursePatch, EnrollmentPatch};
pub use person::{ProfilePatch, Student, Teacher};

/// A type which is stored as a document in a collection
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
	/// The collection documents of this type live in
	const COLLECTION: Collection;
}

/// A stored document: an entity body together with its identifier
#[derive(Clone, Debug, PartialEq)]
pub struct Document<T> {
	pub id: Id,
	pub body: T,
}

impl<T> Document<T> {
	pub fn new(id: Id, body: T) -> Self {
		Self {
			id,
			body,
		}
	}
}

impl<T> Deref for Document<T> {
	type Target = T;
	fn deref(&self) -> &Self::Target {
		&self.body
	}
}

impl<T> DerefMut for Document<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.body
	}
}

pub type StudentModel = Document<Student>;

pub type TeacherModel = Document<Teacher>;

pub type CourseModel = Document<Course>;
