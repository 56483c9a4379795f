//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub credits: i32,
    pub faculty_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faculties::Entity",
        from = "Column::FacultyId",
        to = "super::faculties::Column::Id"
    )]
    Faculty,
    #[sea_orm(has_many = "super::feedbacks::Entity")]
    Feedbacks,
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<super::feedbacks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedbacks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        use crate::models::subjects::entities::Subject;
        use chrono::{DateTime, Utc};

        Subject {
            id: self.id,
            code: self.code,
            name: self.name,
            department: self.department,
            semester: self.semester,
            credits: self.credits,
            faculty_id: self.faculty_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
