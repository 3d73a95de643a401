mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use db::models::{
    assignment::Model as AssignmentModel, course::Model as CourseModel, enrollment,
    question::Model as QuestionModel, quiz::Model as QuizModel, quiz_attempt, submission,
};
use helpers::{create_student, create_teacher, make_test_app};
use serde_json::Value;
use serial_test::serial;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
#[serial]
async fn teacher_stats_counts_platform_totals() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    create_student(db, "S1", "s1@example.com").await;
    create_student(db, "S2", "s2@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/dashboard/teacher/stats", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["student_count"], 2);
    assert_eq!(json["data"]["assignment_count"], 1);
    assert_eq!(json["data"]["quiz_count"], 1);
}

#[tokio::test]
#[serial]
async fn teacher_stats_rejects_students() {
    let (app, app_state) = make_test_app().await;
    let (_student, token) = create_student(app_state.db(), "Stu", "stu@example.com").await;

    let response = app
        .oneshot(get("/api/dashboard/teacher/stats", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn student_stats_counts_pending_assignments() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, _) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, token) = create_student(db, "Stu", "stu@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    enrollment::Model::create(db, student.id, course.id)
        .await
        .unwrap();

    let done = AssignmentModel::create(
        db,
        course.id,
        "Done",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    AssignmentModel::create(
        db,
        course.id,
        "Pending",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    submission::Model::upsert(db, done.id, student.id, Some("work".into()), None)
        .await
        .unwrap();

    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    quiz_attempt::Model::create(db, quiz.id, student.id, vec![], 0, 0)
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/dashboard/student/stats", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["enrolled_courses_count"], 1);
    assert_eq!(json["data"]["pending_assignments_count"], 1);
    assert_eq!(json["data"]["completed_quizzes_count"], 1);
}

#[tokio::test]
#[serial]
async fn teacher_analytics_rolls_up_per_student() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let (student, _) = create_student(db, "Ada", "ada@example.com").await;
    let course = CourseModel::create(db, teacher.id, "Course", "desc", None, None, None)
        .await
        .unwrap();
    enrollment::Model::create(db, student.id, course.id)
        .await
        .unwrap();

    let assignment = AssignmentModel::create(
        db,
        course.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    let sub = submission::Model::upsert(db, assignment.id, student.id, Some("work".into()), None)
        .await
        .unwrap();
    submission::Model::grade(db, sub, Some(85), None)
        .await
        .unwrap();

    let quiz = QuizModel::create(db, course.id, "Quiz", None, None)
        .await
        .unwrap();
    QuestionModel::create(
        db,
        quiz.id,
        "Q1",
        vec!["A".into(), "B".into(), "C".into(), "D".into()],
        0,
        None,
    )
    .await
    .unwrap();
    quiz_attempt::Model::create(db, quiz.id, student.id, vec![], 1, 1)
        .await
        .unwrap();
    quiz_attempt::Model::create(db, quiz.id, student.id, vec![], 0, 1)
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/dashboard/teacher/analytics", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_name"], "Ada");
    assert_eq!(rows[0]["total_marks"], 85);
    assert_eq!(rows[0]["total_quiz_score"], 1);
    assert_eq!(rows[0]["submissions_count"], 1);
    assert_eq!(rows[0]["attempts_count"], 2);
}

#[tokio::test]
#[serial]
async fn teacher_students_lists_distinct_students_with_counts() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let (teacher, token) = create_teacher(db, "Prof", "prof@example.com").await;
    let (other_teacher, _) = create_teacher(db, "Rival", "rival@example.com").await;
    let (student, _) = create_student(db, "Ada", "ada@example.com").await;
    let (outsider, _) = create_student(db, "Outsider", "out@example.com").await;

    let course_a = CourseModel::create(db, teacher.id, "A", "desc", None, None, None)
        .await
        .unwrap();
    let course_b = CourseModel::create(db, teacher.id, "B", "desc", None, None, None)
        .await
        .unwrap();
    let foreign = CourseModel::create(db, other_teacher.id, "Foreign", "desc", None, None, None)
        .await
        .unwrap();

    enrollment::Model::create(db, student.id, course_a.id)
        .await
        .unwrap();
    enrollment::Model::create(db, student.id, course_b.id)
        .await
        .unwrap();
    enrollment::Model::create(db, outsider.id, foreign.id)
        .await
        .unwrap();

    let assignment = AssignmentModel::create(
        db,
        course_a.id,
        "Essay",
        "desc",
        Utc::now() + Duration::days(7),
        None,
    )
    .await
    .unwrap();
    submission::Model::upsert(db, assignment.id, student.id, Some("work".into()), None)
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/teachers/students", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Ada");
    assert_eq!(rows[0]["courses_enrolled"], 2);
    assert_eq!(rows[0]["assignments_submitted"], 1);
    assert_eq!(rows[0]["quizzes_attempted"], 0);
}
