use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::announcement;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /announcements/{announcement_id}
///
/// Deletes an announcement. Only the creator may delete.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` → not the creator
/// - `404 Not Found` → announcement missing
pub async fn delete_announcement(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(announcement_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let announcement = announcement::Entity::find_by_id(announcement_id)
        .one(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Announcement not found")),
            )
                .into_response()
        })?;

    if announcement.created_by != claims.sub {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(
                "Only the creator can delete this announcement",
            )),
        )
            .into_response());
    }

    announcement.delete(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success((), "Announcement deleted successfully")),
    )
        .into_response())
}
