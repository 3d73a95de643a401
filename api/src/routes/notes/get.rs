use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{enrollment, note};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use util::state::AppState;

/// GET /courses/{course_id}/notes
///
/// Lists all notes of a course, newest first. Any authenticated user.
pub async fn get_course_notes(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_course_or_404(db, course_id).await?;

    let notes = note::Entity::find()
        .filter(note::Column::CourseId.eq(course_id))
        .order_by_desc(note::Column::CreatedAt)
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(notes, "Notes retrieved successfully")),
    )
        .into_response())
}

/// GET /notes/my-notes
///
/// Lists notes across every course the authenticated student is enrolled in.
pub async fn get_my_notes(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course_ids = enrollment::Model::enrolled_course_ids(db, claims.sub)
        .await
        .map_err(db_error)?;

    let notes = note::Entity::find()
        .filter(note::Column::CourseId.is_in(course_ids))
        .order_by_desc(note::Column::CreatedAt)
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(notes, "Notes retrieved successfully")),
    )
        .into_response())
}
