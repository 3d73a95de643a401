use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::enrollment;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /courses/{course_id}
///
/// Deletes a course. Dependent content (lectures, assignments, quizzes,
/// notes, enrollments) is left in place; nothing cascades.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course missing
pub async fn delete_course(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course = find_course_or_404(db, course_id).await?;
    require_course_owner(&course, claims.sub)?;

    course.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Course deleted successfully")),
    )
        .into_response())
}

/// DELETE /courses/{course_id}/enroll
///
/// Removes the authenticated student's enrollment.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` → course missing or not enrolled
pub async fn unenroll(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_course_or_404(db, course_id).await?;

    let enrollment = enrollment::Model::find_by_pair(db, claims.sub, course_id)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Not enrolled in this course")),
            )
                .into_response()
        })?;

    enrollment::Entity::delete_by_id(enrollment.id)
        .exec(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Unenrolled successfully")),
    )
        .into_response())
}
