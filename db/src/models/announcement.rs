use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub message: String,

    pub audience: Audience,

    /// Only set when `audience` is `Course`.
    pub course_id: Option<i64>,
    pub created_by: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "audience_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Audience {
    #[sea_orm(string_value = "all")]
    All,

    #[sea_orm(string_value = "students")]
    Students,

    #[sea_orm(string_value = "teachers")]
    Teachers,

    #[sea_orm(string_value = "course")]
    Course,
}

impl Default for Audience {
    fn default() -> Self {
        Self::All
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    Author,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        title: &str,
        message: &str,
        audience: Audience,
        course_id: Option<i64>,
        created_by: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let announcement = ActiveModel {
            title: Set(title.to_owned()),
            message: Set(message.to_owned()),
            audience: Set(audience),
            course_id: Set(course_id),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        announcement.insert(db).await
    }
}
