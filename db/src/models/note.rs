use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,

    pub title: String,
    pub content: String,
    pub file_url: String,

    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub note_type: NoteType,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "note_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NoteType {
    #[sea_orm(string_value = "text")]
    Text,

    #[sea_orm(string_value = "pdf")]
    Pdf,

    #[sea_orm(string_value = "link")]
    Link,
}

impl Default for NoteType {
    fn default() -> Self {
        Self::Text
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        content: Option<String>,
        file_url: Option<String>,
        note_type: Option<NoteType>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let note = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            content: Set(content.unwrap_or_default()),
            file_url: Set(file_url.unwrap_or_default()),
            note_type: Set(note_type.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        note.insert(db).await
    }
}
