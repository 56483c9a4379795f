//! 反馈账本实体
//!
//! 只追加：正常业务路径不存在更新或删除操作。
//! `(student_id, subject_id)` 上的唯一索引在并发提交时裁决唯一赢家。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedbacks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // 提交时刻课程所属教师的快照，课程后续改派不回溯
    pub faculty_id: i64,
    pub q1: i32,
    pub q2: i32,
    pub q3: i32,
    pub q4: i32,
    pub q5: i32,
    pub average_rating: f64,
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::faculties::Entity",
        from = "Column::FacultyId",
        to = "super::faculties::Column::Id"
    )]
    Faculty,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_feedback(self) -> crate::models::feedbacks::entities::Feedback {
        use crate::models::feedbacks::entities::{Feedback, Ratings};
        use chrono::{DateTime, Utc};

        Feedback {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            faculty_id: self.faculty_id,
            ratings: Ratings {
                q1: self.q1,
                q2: self.q2,
                q3: self.q3,
                q4: self.q4,
                q5: self.q5,
            },
            average_rating: self.average_rating,
            comment: self.comment,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
