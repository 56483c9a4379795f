//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub roll: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub department: String,
    pub year: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::feedbacks::Entity")]
    Feedbacks,
    #[sea_orm(has_many = "super::completed_subjects::Entity")]
    CompletedSubjects,
}

impl Related<super::feedbacks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedbacks.def()
    }
}

impl Related<super::completed_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompletedSubjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(
        self,
        completed_subjects: Vec<i64>,
    ) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            name: self.name,
            roll: self.roll,
            email: self.email,
            password_hash: self.password_hash,
            department: self.department,
            year: self.year,
            completed_subjects,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
