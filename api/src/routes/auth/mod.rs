//! Authentication and profile routes for `/api/auth`.
//!
//! - `post.rs` — registration and login
//! - `get.rs` — current user profile
//! - `put.rs` — profile edits and password changes
//! - `common.rs` — shared response DTOs

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use get::me;
use post::{login, register};
use put::{change_password, update_profile};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/auth` route group.
///
/// Routes:
/// - `POST /auth/register`        → create an account and issue a token
/// - `POST /auth/login`           → authenticate and issue a token
/// - `GET  /auth/me`              → current user's profile
/// - `PUT  /auth/profile`         → partial profile update
/// - `PUT  /auth/change-password` → rotate password
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).route_layer(from_fn(allow_authenticated)))
        .route(
            "/profile",
            put(update_profile).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/change-password",
            put(change_password).route_layer(from_fn(allow_authenticated)),
        )
}
