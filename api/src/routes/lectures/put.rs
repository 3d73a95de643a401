use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::lecture::{self, ResourceLink, Resources};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditLectureRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub notes: Option<String>,
    pub resources: Option<Vec<ResourceLink>>,
    pub order: Option<i32>,
}

/// PUT /lectures/{lecture_id}
///
/// Partially updates a lecture. Ownership resolves through the lecture's
/// course.
///
/// ### Responses
/// - `200 OK` → the updated lecture
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → lecture missing
pub async fn edit_lecture(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(lecture_id): Path<i64>,
    Json(req): Json<EditLectureRequest>,
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

    let mut active: lecture::ActiveModel = lecture.into();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(video_url) = req.video_url {
        active.video_url = Set(video_url);
    }
    if let Some(notes) = req.notes {
        active.notes = Set(notes);
    }
    if let Some(resources) = req.resources {
        active.resources = Set(Resources(resources));
    }
    if let Some(order) = req.order {
        active.order = Set(order);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(updated, "Lecture updated successfully")),
    )
        .into_response())
}
