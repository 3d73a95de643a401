pub mod app;

#[allow(unused_imports)]
pub use app::{create_student, create_teacher, make_test_app};
