//! Teacher-facing listings for `/api/teachers`.

use crate::auth::guards::allow_teacher;
use axum::{Router, middleware::from_fn, routing::get};
use get::get_students;
use util::state::AppState;

pub mod get;

/// Builds the `/teachers` route group.
///
/// Routes:
/// - `GET /teachers/students` → distinct students across owned courses with
///   activity counts
pub fn teachers_routes() -> Router<AppState> {
    Router::new().route(
        "/students",
        get(get_students).route_layer(from_fn(allow_teacher)),
    )
}
