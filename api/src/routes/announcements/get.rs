use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::announcement::{self, Audience};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnnouncementFilter {
    pub course_id: Option<i64>,
}

/// GET /announcements
///
/// The authenticated user's announcement feed, newest first, capped at 50.
/// Students see `all` and `students` audiences; teachers see `all` and
/// `teachers`. Course-scoped announcements are included only when a
/// `course_id` query parameter names their course.
pub async fn get_announcements(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Query(filter): Query<AnnouncementFilter>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let role_audience = if claims.is_teacher() {
        Audience::Teachers
    } else {
        Audience::Students
    };

    let mut visible = Condition::any()
        .add(announcement::Column::Audience.eq(Audience::All))
        .add(announcement::Column::Audience.eq(role_audience));

    if let Some(course_id) = filter.course_id {
        visible = visible.add(
            Condition::all()
                .add(announcement::Column::Audience.eq(Audience::Course))
                .add(announcement::Column::CourseId.eq(course_id)),
        );
    }

    let announcements = announcement::Entity::find()
        .filter(visible)
        .order_by_desc(announcement::Column::CreatedAt)
        .limit(50)
        .all(db)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            announcements,
            "Announcements retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /announcements/{announcement_id}
///
/// Returns a single announcement. Any authenticated user.
pub async fn get_announcement(
    State(app_state): State<AppState>,
    Path(announcement_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    match announcement::Entity::find_by_id(announcement_id).one(db).await {
        Ok(Some(announcement)) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(
                announcement,
                "Announcement retrieved successfully",
            )),
        )
            .into_response()),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Announcement not found")),
        )
            .into_response()),
        Err(e) => Err(db_error(e)),
    }
}
