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
use db::models::course::{self, Tags};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

/// PUT /courses/{course_id}
///
/// Partially updates a course. Omitted fields keep their previous values.
/// Only the owning teacher may edit; publishing happens through the
/// `is_published` flag here.
///
/// ### Responses
/// - `200 OK` → the updated course
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course missing
pub async fn edit_course(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
    Json(req): Json<EditCourseRequest>,
) -> Result<Response, Response> {
    let db = app_state.db();

    let course = find_course_or_404(db, course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let mut active: course::ActiveModel = course.into();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(department) = req.department {
        active.department = Set(department);
    }
    if let Some(semester) = req.semester {
        active.semester = Set(semester);
    }
    if let Some(tags) = req.tags {
        active.tags = Set(Tags(tags));
    }
    if let Some(is_published) = req.is_published {
        active.is_published = Set(is_published);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(updated, "Course updated successfully")),
    )
        .into_response())
}
