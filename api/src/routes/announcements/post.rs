use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, format_validation_errors};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::announcement::{self, Audience};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    /// Defaults to `all`.
    pub audience: Option<Audience>,
    pub course_id: Option<i64>,
}

/// POST /announcements
///
/// Creates an announcement authored by the authenticated teacher. A
/// `course` audience requires a `course_id`.
///
/// ### Responses
/// - `201 Created` → the announcement
/// - `400 Bad Request` → validation failure or course audience without a course
pub async fn create_announcement(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<Response, Response> {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response());
    }

    let audience = req.audience.unwrap_or_default();

    if audience == Audience::Course && req.course_id.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "A course announcement requires a course_id",
            )),
        )
            .into_response());
    }

    let db = app_state.db();

    let course_id = if audience == Audience::Course {
        req.course_id
    } else {
        None
    };

    let announcement = announcement::Model::create(
        db,
        &req.title,
        &req.message,
        audience,
        course_id,
        claims.sub,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            announcement,
            "Announcement created successfully",
        )),
    )
        .into_response())
}
