use db::models::{course, user};
use serde::Serialize;

/// Course payload with the owning teacher's public identity joined in.
#[derive(Debug, Serialize)]
pub struct CourseWithTeacher {
    #[serde(flatten)]
    pub course: course::Model,
    pub teacher_name: String,
    pub teacher_email: String,
}

impl CourseWithTeacher {
    pub fn from_pair(course: course::Model, teacher: Option<user::Model>) -> Self {
        let (teacher_name, teacher_email) = teacher
            .map(|t| (t.name, t.email))
            .unwrap_or_default();
        Self {
            course,
            teacher_name,
            teacher_email,
        }
    }
}
