use serde::{Deserialize, Serialize};

use super::Entity;
use crate::dbs::Collection;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
	pub title: String,
	pub description: String,
	/// The teacher of the course. Not checked against the teachers collection.
	pub teacher_id: String,
	/// Enrolled students, in enrollment order. May contain duplicates.
	pub student_ids: Vec<String>,
}

impl Course {
	pub fn new(title: String, description: String, teacher_id: String) -> Self {
		Self {
			title,
			description,
			teacher_id,
			student_ids: Vec::new(),
		}
	}

	/// Append a student, even if already enrolled
	pub fn enroll(&mut self, student_id: String) {
		self.student_ids.push(student_id);
	}

	/// Remove the first occurrence of a student, if any.
	///
	/// Returns whether the list changed.
	pub fn unenroll(&mut self, student_id: &str) -> bool {
		match self.student_ids.iter().position(|v| v == student_id) {
			Some(index) => {
				self.student_ids.remove(index);
				true
			}
			None => false,
		}
	}
}

impl Entity for Course {
	const COLLECTION: Collection = Collection::Courses;
}

/// The fields of a course an update may change
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
	pub title: String,
	pub description: String,
	pub teacher_id: String,
}

/// Replaces the enrollment list of a course
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPatch<'a> {
	pub student_ids: &'a [String],
}
