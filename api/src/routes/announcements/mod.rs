//! Announcement routes for `/api/announcements`.
//!
//! - `post.rs` — create announcement
//! - `get.rs` — audience-filtered feed and single announcement
//! - `put.rs` — edits (creator only)
//! - `delete.rs` — delete (creator only)

use crate::auth::guards::{allow_authenticated, allow_teacher};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_announcement;
use get::{get_announcement, get_announcements};
use post::create_announcement;
use put::edit_announcement;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/announcements` route group.
///
/// Routes:
/// - `GET    /announcements`                    → audience-filtered feed (authenticated)
/// - `POST   /announcements`                    → create (teacher)
/// - `GET    /announcements/{announcement_id}`  → single announcement (authenticated)
/// - `PUT    /announcements/{announcement_id}`  → edit (creator)
/// - `DELETE /announcements/{announcement_id}`  → delete (creator)
pub fn announcements_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_announcements).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/",
            post(create_announcement).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{announcement_id}",
            get(get_announcement).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{announcement_id}",
            put(edit_announcement).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{announcement_id}",
            delete(delete_announcement).route_layer(from_fn(allow_teacher)),
        )
}
