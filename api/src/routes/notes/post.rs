use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404, format_validation_errors, require_course_owner};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::note::{self, NoteType};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub content: Option<String>,
    pub file_url: Option<String>,

    /// Defaults to `text`.
    #[serde(rename = "type")]
    pub note_type: Option<NoteType>,
}

/// POST /courses/{course_id}/notes
///
/// Creates a note in a course the authenticated teacher owns.
///
/// ### Responses
/// - `201 Created` → the note
/// - `400 Bad Request` → validation failure
/// - `403 Forbidden` → not the owner
/// - `404 Not Found` → course missing
pub async fn create_note(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
    Json(req): Json<CreateNoteRequest>,
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

    let course = find_course_or_404(db, course_id).await?;
    require_course_owner(&course, claims.sub)?;

    let note = note::Model::create(
        db,
        course_id,
        &req.title,
        req.content,
        req.file_url,
        req.note_type,
    )
    .await
    .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(note, "Note created successfully")),
    )
        .into_response())
}
