use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's submission for an assignment. At most one row exists per
/// (assignment, student); resubmission overwrites the existing row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub assignment_id: i64,
    pub student_id: i64,

    pub content: String,
    pub file_url: String,
    pub submitted_at: DateTime<Utc>,

    /// None until the owning teacher grades the submission.
    pub marks: Option<i32>,
    pub feedback: String,
    pub graded_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_pair(
        db: &DbConn,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    /// Submit (or resubmit) against an assignment. A resubmission keeps the
    /// row and only overwrites content/file_url and refreshes submitted_at;
    /// grading fields are left untouched.
    pub async fn upsert(
        db: &DbConn,
        assignment_id: i64,
        student_id: i64,
        content: Option<String>,
        file_url: Option<String>,
    ) -> Result<Model, DbErr> {
        match Self::find_by_pair(db, assignment_id, student_id).await? {
            Some(existing) => {
                let mut active: ActiveModel = existing.clone().into();
                if let Some(content) = content {
                    active.content = Set(content);
                }
                if let Some(file_url) = file_url {
                    active.file_url = Set(file_url);
                }
                active.submitted_at = Set(Utc::now());
                active.update(db).await
            }
            None => {
                let submission = ActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(student_id),
                    content: Set(content.unwrap_or_default()),
                    file_url: Set(file_url.unwrap_or_default()),
                    submitted_at: Set(Utc::now()),
                    marks: Set(None),
                    feedback: Set(String::new()),
                    graded_at: Set(None),
                    ..Default::default()
                };
                submission.insert(db).await
            }
        }
    }

    /// Record marks/feedback. Re-grading overwrites silently.
    pub async fn grade(
        db: &DbConn,
        submission: Model,
        marks: Option<i32>,
        feedback: Option<String>,
    ) -> Result<Model, DbErr> {
        let mut active: ActiveModel = submission.into();
        if let Some(marks) = marks {
            active.marks = Set(Some(marks));
        }
        if let Some(feedback) = feedback {
            active.feedback = Set(feedback);
        }
        active.graded_at = Set(Some(Utc::now()));
        active.update(db).await
    }
}
