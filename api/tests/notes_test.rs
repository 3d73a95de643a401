mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::{course::Model as CourseModel, enrollment, note};
use helpers::{create_student, create_teacher, make_test_app};
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[serial]
async fn teacher_creates_note_on_own_course() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/courses/{}/notes", course.id))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "title": "Week 1 reading",
                "content": "Chapters 1-3",
                "type": "text"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Note created successfully");
    assert_eq!(json["data"]["title"], "Week 1 reading");
    assert_eq!(json["data"]["type"], "text");
}

#[tokio::test]
#[serial]
async fn create_note_on_foreign_course_is_forbidden() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (owner, _) = create_teacher(db, "Owner", "owner@example.com").await;
    let (_other, other_token) = create_teacher(db, "Other", "other@example.com").await;
    let course = CourseModel::create(db, owner.id, "Course", "desc", None, None, None)
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/courses/{}/notes", course.id))
        .header("Authorization", format!("Bearer {other_token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "title": "Sneaky" }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn course_notes_listing_returns_notes() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (_student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    note::Model::create(
        db,
        course.id,
        "Syllabus",
        Some("Full outline".into()),
        None,
        Some(note::NoteType::Text),
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/courses/{}/notes", course.id))
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notes = json["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Syllabus");
}

#[tokio::test]
#[serial]
async fn my_notes_spans_enrolled_courses_only() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, token) = create_student(db, "Stu", "stu@example.com").await;

    let enrolled = CourseModel::create(db, teacher.id, "Enrolled", "desc", None, None, None)
        .await
        .unwrap();
    let other = CourseModel::create(db, teacher.id, "Other", "desc", None, None, None)
        .await
        .unwrap();
    enrollment::Model::create(db, student.id, enrolled.id)
        .await
        .unwrap();

    note::Model::create(db, enrolled.id, "Visible", None, None, Some(note::NoteType::Text))
        .await
        .unwrap();
    note::Model::create(db, other.id, "Hidden", None, None, Some(note::NoteType::Text))
        .await
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/api/notes/my-notes")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notes = json["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Visible");
}

#[tokio::test]
#[serial]
async fn delete_note_checks_course_scoping() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let course_a = CourseModel::create(db, teacher.id, "A", "desc", None, None, None)
        .await
        .unwrap();
    let course_b = CourseModel::create(db, teacher.id, "B", "desc", None, None, None)
        .await
        .unwrap();
    let note = note::Model::create(db, course_a.id, "Note", None, None, Some(note::NoteType::Text))
        .await
        .unwrap();

    // Wrong course in the path does not match the note.
    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/courses/{}/notes/{}", course_b.id, note.id))
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/courses/{}/notes/{}", course_a.id, note.id))
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
