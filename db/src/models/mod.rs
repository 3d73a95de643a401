pub mod announcement;
pub mod assignment;
pub mod coding_problem;
pub mod course;
pub mod enrollment;
pub mod lecture;
pub mod note;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod submission;
pub mod user;
