use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::assignments::common::find_assignment_or_404;
use crate::routes::common::{db_error, find_course_or_404, format_validation_errors, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use db::models::{assignment, submission};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    pub course_id: i64,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub due_date: DateTime<Utc>,

    #[validate(range(min = 1, message = "Max marks must be positive"))]
    pub max_marks: Option<i32>,
}

/// POST /assignments
///
/// Creates an assignment in a course the authenticated teacher owns.
/// `max_marks` defaults to 100.
///
/// ### Responses
/// - `201 Created` → the assignment
/// - `400 Bad Request` → validation failure
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course missing
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<Response, Response> {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response());
    }

    let db = app_state.db();

    let course = find_course_or_404(db, req.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let assignment = assignment::Model::create(
        db,
        req.course_id,
        &req.title,
        &req.description,
        req.due_date,
        req.max_marks,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            assignment,
            "Assignment created successfully",
        )),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub content: Option<String>,
    pub file_url: Option<String>,
}

/// POST /assignments/{assignment_id}/submit
///
/// Submits (or resubmits) work against an assignment. At most one submission
/// row exists per student and assignment; a second submit overwrites the
/// content and refreshes `submitted_at` without touching grading fields.
///
/// ### Responses
/// - `200 OK` → the submission
/// - `404 Not Found` → assignment missing
pub async fn submit_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<SubmitRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_assignment_or_404(db, assignment_id).await?;

    let submission =
        submission::Model::upsert(db, assignment_id, claims.sub, req.content, req.file_url)
            .await
            .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            submission,
            "Assignment submitted successfully",
        )),
    )
        .into_response())
}
