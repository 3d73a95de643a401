use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join record granting a student visibility into a course's content.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub course_id: i64,

    pub enrolled_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, student_id: i64, course_id: i64) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            enrolled_at: Set(Utc::now()),
            ..Default::default()
        };

        enrollment.insert(db).await
    }

    /// Point lookup on the unique (student, course) pair.
    pub async fn find_by_pair(
        db: &DbConn,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await
    }

    /// Course ids the student is enrolled in; the filter set used by all
    /// "my-*" student listings.
    pub async fn enrolled_course_ids(db: &DbConn, student_id: i64) -> Result<Vec<i64>, DbErr> {
        let enrollments = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await?;
        Ok(enrollments.into_iter().map(|e| e.course_id).collect())
    }
}
