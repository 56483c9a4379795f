use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::completed_subjects;
use crate::entity::feedbacks::{ActiveModel, Column, Entity as Feedbacks, Model as FeedbackModel};
use crate::entity::{faculties, subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    feedbacks::{
        entities::Feedback,
        requests::{FeedbackListQuery, NewFeedback},
        responses::{CompletedFeedbackItem, FeedbackListResponse},
    },
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 写入反馈。`(student_id, subject_id)` 唯一索引冲突时
    /// 原样返回数据库错误，由业务层判定为重复提交。
    pub async fn insert_feedback_impl(&self, feedback: NewFeedback) -> Result<Feedback> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(feedback.student_id),
            subject_id: Set(feedback.subject_id),
            faculty_id: Set(feedback.faculty_id),
            q1: Set(feedback.ratings.q1),
            q2: Set(feedback.ratings.q2),
            q3: Set(feedback.ratings.q3),
            q4: Set(feedback.ratings.q4),
            q5: Set(feedback.ratings.q5),
            average_rating: Set(feedback.average_rating),
            comment: Set(feedback.comment),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入反馈失败: {e}")))?;

        Ok(result.into_feedback())
    }

    /// 查询某学生对某课程的反馈
    pub async fn get_feedback_by_student_and_subject_impl(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<Feedback>> {
        let result = Feedbacks::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询反馈失败: {e}")))?;

        Ok(result.map(|m| m.into_feedback()))
    }

    /// 某学生的已评列表，按提交时间倒序
    pub async fn list_feedbacks_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<CompletedFeedbackItem>> {
        let models = Feedbacks::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询反馈列表失败: {e}")))?;

        self.enrich_feedbacks(models).await
    }

    /// 管理端反馈列表
    pub async fn list_feedbacks_with_pagination_impl(
        &self,
        query: FeedbackListQuery,
    ) -> Result<FeedbackListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Feedbacks::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(faculty_id) = query.faculty_id {
            select = select.filter(Column::FacultyId.eq(faculty_id));
        }

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询反馈总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询反馈页数失败: {e}")))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询反馈列表失败: {e}")))?;

        Ok(FeedbackListResponse {
            items: self.enrich_feedbacks(models).await?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 全量反馈，供聚合统计使用
    pub async fn list_all_feedbacks_impl(&self) -> Result<Vec<Feedback>> {
        let models = Feedbacks::find()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询反馈列表失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_feedback()).collect())
    }

    /// 登记学生已完成某课程的反馈，重复登记静默忽略
    pub async fn add_completed_subject_impl(&self, student_id: i64, subject_id: i64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = completed_subjects::ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            completed_at: Set(now),
            ..Default::default()
        };

        completed_subjects::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    completed_subjects::Column::StudentId,
                    completed_subjects::Column::SubjectId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("登记已完成课程失败: {e}")))?;

        Ok(())
    }

    /// 查询学生已完成的课程 id 列表
    pub async fn get_completed_subject_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        let rows = completed_subjects::Entity::find()
            .filter(completed_subjects::Column::StudentId.eq(student_id))
            .order_by_asc(completed_subjects::Column::SubjectId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询已完成课程失败: {e}")))?;

        Ok(rows.into_iter().map(|r| r.subject_id).collect())
    }

    /// 批量补全反馈的课程与教师信息
    async fn enrich_feedbacks(
        &self,
        models: Vec<FeedbackModel>,
    ) -> Result<Vec<CompletedFeedbackItem>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let subject_ids: Vec<i64> = models.iter().map(|m| m.subject_id).collect();
        let faculty_ids: Vec<i64> = models.iter().map(|m| m.faculty_id).collect();

        let subject_map: HashMap<i64, (String, String)> = subjects::Entity::find()
            .filter(subjects::Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程信息失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, (s.code, s.name)))
            .collect();

        let faculty_map: HashMap<i64, String> = faculties::Entity::find()
            .filter(faculties::Column::Id.is_in(faculty_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师信息失败: {e}")))?
            .into_iter()
            .map(|f| (f.id, f.name))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let (subject_code, subject_name) = subject_map
                    .get(&m.subject_id)
                    .cloned()
                    .unwrap_or_default();
                let faculty_name = faculty_map.get(&m.faculty_id).cloned().unwrap_or_default();

                CompletedFeedbackItem {
                    feedback: m.into_feedback(),
                    subject_code,
                    subject_name,
                    faculty_name,
                }
            })
            .collect())
    }
}
