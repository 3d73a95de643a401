use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::routes::auth::common::{AuthResponse, UserResponse};
use crate::routes::common::format_validation_errors;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{Model as UserModel, Role};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Defaults to `student` when omitted. Immutable after registration.
    pub role: Option<Role>,
}

/// POST /auth/register
///
/// Register a new user and issue a JWT.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Alice Smith",
///   "email": "alice@example.com",
///   "password": "strongpassword",
///   "role": "teacher"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` → profile plus `token` and `expires_at`
/// - `400 Bad Request` → validation failure
/// - `409 Conflict` → email already registered
/// - `500 Internal Server Error` → database failure
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
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

    match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<()>::error(
                    "A user with this email already exists",
                )),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    }

    let role = req.role.unwrap_or(Role::Student);

    match UserModel::create(db, &req.name, &req.email, &req.password, role).await {
        Ok(user) => {
            let (token, expires_at) = generate_jwt(user.id, user.role);
            let payload = AuthResponse {
                user: UserResponse::from(user),
                token,
                expires_at,
            };
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(payload, "User registered successfully")),
            )
                .into_response()
        }
        Err(e) => {
            // The unique index can still race the pre-check above.
            if e.to_string().contains("UNIQUE") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<()>::error(
                        "A user with this email already exists",
                    )),
                )
                    .into_response();
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

/// POST /auth/login
///
/// Authenticate an existing user and issue a JWT.
///
/// ### Responses
/// - `200 OK` → profile plus `token` and `expires_at`
/// - `401 Unauthorized` → unknown email or wrong password (same message for
///   both, so the endpoint does not leak which accounts exist)
pub async fn login(State(app_state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let db = app_state.db();

    let user = match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error("Invalid email or password")),
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

    if !user.verify_password(&req.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Invalid email or password")),
        )
            .into_response();
    }

    let (token, expires_at) = generate_jwt(user.id, user.role);
    let payload = AuthResponse {
        user: UserResponse::from(user),
        token,
        expires_at,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(payload, "Login successful")),
    )
        .into_response()
}
