//! Aggregate statistics routes for `/api/dashboard`.

use crate::auth::guards::{allow_authenticated, allow_teacher};
use axum::{Router, middleware::from_fn, routing::get};
use get::{student_stats, teacher_analytics, teacher_stats};
use util::state::AppState;

pub mod get;

/// Builds the `/dashboard` route group.
///
/// Routes:
/// - `GET /dashboard/teacher/stats`     → platform counts (teacher)
/// - `GET /dashboard/teacher/analytics` → per-student rollup over owned courses (teacher)
/// - `GET /dashboard/student/stats`     → the caller's own activity counts
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teacher/stats",
            get(teacher_stats).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/teacher/analytics",
            get(teacher_analytics).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/student/stats",
            get(student_stats).route_layer(from_fn(allow_authenticated)),
        )
}
