use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, format_validation_errors, require_course_owner};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lecture::{self, ResourceLink};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLectureRequest {
    pub course_id: i64,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
    pub video_url: Option<String>,
    pub notes: Option<String>,
    pub resources: Option<Vec<ResourceLink>>,
    pub order: Option<i32>,
}

/// POST /lectures
///
/// Creates a lecture in a course the authenticated teacher owns.
///
/// ### Responses
/// - `201 Created` → the lecture
/// - `400 Bad Request` → validation failure
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course missing
pub async fn create_lecture(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateLectureRequest>,
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

    let course = find_course_or_404(db, req.course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let lecture = lecture::Model::create(
        db,
        req.course_id,
        &req.title,
        req.description,
        req.video_url,
        req.notes,
        req.resources,
        req.order,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(lecture, "Lecture created successfully")),
    )
        .into_response())
}
