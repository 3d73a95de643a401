pub mod m202608010001_create_users;
pub mod m202608010002_create_courses;
pub mod m202608010003_create_enrollments;
pub mod m202608010004_create_lectures;
pub mod m202608010005_create_notes;
pub mod m202608010006_create_assignments;
pub mod m202608010007_create_submissions;
pub mod m202608010008_create_quizzes;
pub mod m202608010009_create_questions;
pub mod m202608010010_create_quiz_attempts;
pub mod m202608010011_create_announcements;
pub mod m202608010012_create_coding_problems;
