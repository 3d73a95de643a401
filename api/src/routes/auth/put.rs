use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::auth::common::UserResponse;
use crate::routes::common::format_validation_errors;
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::user::{self, Model as UserModel};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub bio: Option<String>,
    pub department: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Year must be between 1 and 10"))]
    pub year: Option<i32>,
    pub avatar: Option<String>,
}

/// PUT /auth/profile
///
/// Partially updates the authenticated user's profile. Omitted fields keep
/// their previous values. Email and role cannot be changed here.
///
/// ### Responses
/// - `200 OK` → updated profile
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → token refers to a deleted account
pub async fn update_profile(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    let db = app_state.db();

    let existing = match user::Entity::find_by_id(claims.sub).one(db).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("User not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    let mut active: user::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(bio) = req.bio {
        active.bio = Set(bio);
    }
    if let Some(department) = req.department {
        active.department = Set(department);
    }
    if let Some(year) = req.year {
        active.year = Set(Some(year));
    }
    if let Some(avatar) = req.avatar {
        active.avatar = Set(avatar);
    }
    active.updated_at = Set(Utc::now());

    match active.update(db).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "Profile updated successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// PUT /auth/change-password
///
/// Rotates the authenticated user's password after verifying the current one.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` → new password too short
/// - `401 Unauthorized` → current password is wrong
pub async fn change_password(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    let db = app_state.db();

    let existing = match user::Entity::find_by_id(claims.sub).one(db).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("User not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    if !existing.verify_password(&req.current_password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Current password is incorrect")),
        )
            .into_response();
    }

    let password_hash = match UserModel::hash_password(&req.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    let mut active: user::ActiveModel = existing.into();
    active.password_hash = Set(password_hash);
    active.updated_at = Set(Utc::now());

    match active.update(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Password changed successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
