use serde::{Deserialize, Serialize};

use super::Entity;
use crate::dbs::Collection;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
	pub name: String,
	pub email: String,
	/// Declared for parity with courses, but no operation writes to it
	pub enrolled_courses: Vec<String>,
}

impl Student {
	pub fn new(name: String, email: String) -> Self {
		Self {
			name,
			email,
			enrolled_courses: Vec::new(),
		}
	}
}

impl Entity for Student {
	const COLLECTION: Collection = Collection::Students;
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
	pub name: String,
	pub email: String,
	/// Declared for parity with courses, but no operation writes to it
	pub courses_taught: Vec<String>,
}

impl Teacher {
	pub fn new(name: String, email: String) -> Self {
		Self {
			name,
			email,
			courses_taught: Vec::new(),
		}
	}
}

impl Entity for Teacher {
	const COLLECTION: Collection = Collection::Teachers;
}

/// The fields of a student or teacher an update may change
#[derive(Clone, Debug, Serialize)]
pub struct ProfilePatch {
	pub name: String,
	pub email: String,
}
