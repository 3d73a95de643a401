use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::assignments::common::find_assignment_or_404;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use db::models::{assignment, submission};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub max_marks: Option<i32>,
}

/// PUT /assignments/{assignment_id}
///
/// Partially updates an assignment. Ownership resolves through the
/// assignment's course.
///
/// ### Responses
/// - `200 OK` → the updated assignment
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → assignment missing
pub async fn edit_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<EditAssignmentRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let assignment = find_assignment_or_404(db, assignment_id).await?;
    let course = find_course_or_404(db, assignment.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let mut active: assignment::ActiveModel = assignment.into();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(due_date) = req.due_date {
        active.due_date = Set(due_date);
    }
    if let Some(max_marks) = req.max_marks {
        active.max_marks = Set(max_marks);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            updated,
            "Assignment updated successfully",
        )),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub marks: Option<i32>,
    pub feedback: Option<String>,
}

/// PUT /assignments/submissions/{submission_id}/grade
///
/// Records marks and feedback on a submission and stamps `graded_at`.
/// Re-grading overwrites silently. Ownership resolves through the
/// submission's assignment and course.
///
/// ### Responses
/// - `200 OK` → the graded submission
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → submission missing
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(submission_id): Path<i64>,
    Json(req): Json<GradeRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let submission = submission::Entity::find_by_id(submission_id)
        .one(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Submission not found")),
            )
                .into_response()
        })?;

    let assignment = find_assignment_or_404(db, submission.assignment_id).await?;
    let course = find_course_or_404(db, assignment.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let graded = submission::Model::grade(db, submission, req.marks, req.feedback)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            graded,
            "Submission graded successfully",
        )),
    )
        .into_response())
}
