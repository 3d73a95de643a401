use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{assignment, submission, user};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

/// Assignment joined with one student's submission, if any.
#[derive(Debug, Serialize)]
pub struct AssignmentWithSubmission {
    #[serde(flatten)]
    pub assignment: assignment::Model,
    pub submission: Option<submission::Model>,
}

/// Submission joined with the submitting student's public identity.
#[derive(Debug, Serialize)]
pub struct SubmissionWithStudent {
    #[serde(flatten)]
    pub submission: submission::Model,
    pub student_name: String,
    pub student_email: String,
}

impl SubmissionWithStudent {
    pub fn from_pair(submission: submission::Model, student: Option<user::Model>) -> Self {
        let (student_name, student_email) = student
            .map(|s| (s.name, s.email))
            .unwrap_or_default();
        Self {
            submission,
            student_name,
            student_email,
        }
    }
}

/// Loads an assignment or produces the standard `404` response.
pub async fn find_assignment_or_404(
    db: &DatabaseConnection,
    assignment_id: i64,
) -> Result<assignment::Model, Response> {
    match assignment::Entity::find_by_id(assignment_id).one(db).await {
        Ok(Some(assignment)) => Ok(assignment),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Assignment not found")),
        )
            .into_response()),
        Err(e) => Err(db_error(e)),
    }
}
