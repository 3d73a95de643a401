use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, format_validation_errors};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, enrollment};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub department: Option<String>,
    pub semester: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// POST /courses
///
/// Creates a course owned by the authenticated teacher. New courses start
/// unpublished.
///
/// ### Responses
/// - `201 Created` → the course
/// - `400 Bad Request` → validation failure
pub async fn create(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateCourseRequest>,
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

    let course = course::Model::create(
        db,
        claims.sub,
        &req.title,
        &req.description,
        req.department,
        req.semester,
        req.tags,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(course, "Course created successfully")),
    )
        .into_response())
}

/// POST /courses/{course_id}/enroll
///
/// Enrolls the authenticated student in a published course.
///
/// ### Responses
/// - `201 Created` → the enrollment
/// - `400 Bad Request` → course not published
/// - `404 Not Found` → course missing
/// - `409 Conflict` → already enrolled
pub async fn enroll(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course = find_course_or_404(db, course_id).await?;

    if !course.is_published {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Cannot enroll in an unpublished course",
            )),
        )
            .into_response());
    }

    if enrollment::Model::find_by_pair(db, claims.sub, course_id)
        .await
        .map_err(db_error)?
        .is_some()
    {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error("Already enrolled in this course")),
        )
            .into_response());
    }

    let enrollment = enrollment::Model::create(db, claims.sub, course_id)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(enrollment, "Enrolled successfully")),
    )
        .into_response())
}
