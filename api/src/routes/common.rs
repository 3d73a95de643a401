use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use validator::ValidationErrors;

/// Flattens validator errors into a single `; `-joined message string for the
/// response envelope.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// `500` with the database error in the message.
pub fn db_error(e: DbErr) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
    )
        .into_response()
}

/// Loads a course or produces the standard `404` response. Used by every
/// handler that resolves ownership through a course.
pub async fn find_course_or_404(
    db: &DatabaseConnection,
    course_id: i64,
) -> Result<course::Model, Response> {
    match course::Entity::find_by_id(course_id).one(db).await {
        Ok(Some(course)) => Ok(course),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response()),
        Err(e) => Err(db_error(e)),
    }
}

/// `403` unless the user owns the course. Existence is checked first by the
/// caller, so a missing course never reaches this.
pub fn require_course_owner(course: &course::Model, user_id: i64) -> Result<(), Response> {
    if course.is_owned_by(user_id) {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("You do not own this course")),
        )
            .into_response())
    }
}
