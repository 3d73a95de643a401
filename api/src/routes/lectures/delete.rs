use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lecture;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /lectures/{lecture_id}
///
/// Deletes a lecture from a course the authenticated teacher owns.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → lecture missing
pub async fn delete_lecture(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(lecture_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let lecture = lecture::Entity::find_by_id(lecture_id)
        .one(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Lecture not found")),
            )
                .into_response()
        })?;

    let course = find_course_or_404(db, lecture.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    lecture.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Lecture deleted successfully")),
    )
        .into_response())
}
