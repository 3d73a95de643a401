use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::announcement::{self, Audience};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditAnnouncementRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub audience: Option<Audience>,
    pub course_id: Option<i64>,
}

/// PUT /announcements/{announcement_id}
///
/// Partially updates an announcement. Only the creator may edit.
///
/// ### Responses
/// - `200 OK` → the updated announcement
/// - `403 Forbidden` → not the creator
/// - `404 Not Found` → announcement missing
pub async fn edit_announcement(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(announcement_id): Path<i64>,
    Json(req): Json<EditAnnouncementRequest>,
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
                "Only the creator can edit this announcement",
            )),
        )
            .into_response());
    }

    let mut active: announcement::ActiveModel = announcement.into();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(message) = req.message {
        active.message = Set(message);
    }
    if let Some(audience) = req.audience {
        active.audience = Set(audience);
        if audience != Audience::Course {
            active.course_id = Set(None);
        }
    }
    if let Some(course_id) = req.course_id {
        active.course_id = Set(Some(course_id));
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            updated,
            "Announcement updated successfully",
        )),
    )
        .into_response())
}
