use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::auth::common::UserResponse;
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user;
use sea_orm::EntityTrait;
use util::state::AppState;

/// GET /auth/me
///
/// Returns the authenticated user's profile.
///
/// ### Responses
/// - `200 OK` → profile
/// - `404 Not Found` → token refers to a deleted account
pub async fn me(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    match user::Entity::find_by_id(claims.sub).one(db).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "Profile retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("User not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
