use crate::response::ApiResponse;
use crate::routes::common::{db_error, find_course_or_404};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lecture;
use sea_orm::EntityTrait;
use util::state::AppState;

/// GET /lectures/course/{course_id}
///
/// Lists a course's lectures ordered by their display position. Public.
pub async fn get_lectures_by_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    find_course_or_404(db, course_id).await?;

    let lectures = lecture::Model::for_course(db, course_id)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            lectures,
            "Lectures retrieved successfully",
        )),
    )
        .into_response())
}

/// GET /lectures/{lecture_id}
///
/// Returns a single lecture. Public.
pub async fn get_lecture(
    State(app_state): State<AppState>,
    Path(lecture_id): Path<i64>,
) -> Result<Response, Response> {
    let db = app_state.db();

    match lecture::Entity::find_by_id(lecture_id).one(db).await {
        Ok(Some(lecture)) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(
                lecture,
                "Lecture retrieved successfully",
            )),
        )
            .into_response()),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Lecture not found")),
        )
            .into_response()),
        Err(e) => Err(db_error(e)),
    }
}
