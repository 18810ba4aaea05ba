//! Conversions from stored documents to API representations.

use async_graphql::ID;

use super::types::{Course, Student, Teacher};
use crate::model::{CourseModel, StudentModel, TeacherModel};

impl From<StudentModel> for Student {
	fn from(v: StudentModel) -> Self {
		Self {
			id: ID(v.id.to_string()),
			name: v.body.name,
			email: v.body.email,
			enrolled_courses: v.body.enrolled_courses,
		}
	}
}

impl From<TeacherModel> for Teacher {
	fn from(v: TeacherModel) -> Self {
		Self {
			id: ID(v.id.to_string()),
			name: v.body.name,
			email: v.body.email,
			courses_taught: v.body.courses_taught,
		}
	}
}

impl From<CourseModel> for Course {
	fn from(v: CourseModel) -> Self {
		Self {
			id: ID(v.id.to_string()),
			title: v.body.title,
			description: v.body.description,
			teacher_id: v.body.teacher_id,
			student_ids: v.body.student_ids,
		}
	}
}
