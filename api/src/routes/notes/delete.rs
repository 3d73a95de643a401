use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::note;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /courses/{course_id}/notes/{note_id}
///
/// Deletes a note from a course the authenticated teacher owns. The note
/// must belong to the course in the path.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course or note missing
pub async fn delete_note(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path((course_id, note_id)): Path<(i64, i64)>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course = find_course_or_404(db, course_id).await?;

    let note = note::Entity::find_by_id(note_id)
        .one(db)
        .await
        .map_err(db_error)?
        .filter(|n| n.course_id == course_id)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Note not found")),
            )
                .into_response()
        })?;

    require_course_owner(&course, claims.sub)?;

    note.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Note deleted successfully")),
    )
        .into_response())
}
