//! 教师档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub department: String,
    pub designation: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subjects::Entity")]
    Subjects,
    #[sea_orm(has_many = "super::feedbacks::Entity")]
    Feedbacks,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
}

impl Related<super::feedbacks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedbacks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_faculty(self) -> crate::models::faculties::entities::Faculty {
        use crate::models::faculties::entities::{Designation, Faculty};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        Faculty {
            id: self.id,
            name: self.name,
            department: self.department,
            // 数据库中的值由业务层写入，解析失败归入 Other
            designation: Designation::from_str(&self.designation).unwrap_or(Designation::Other),
            email: self.email,
            phone: self.phone,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
