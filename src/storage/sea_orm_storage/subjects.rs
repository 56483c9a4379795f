use super::SeaOrmStorage;
use crate::entity::feedbacks;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            department: Set(req.department),
            semester: Set(req.semester),
            credits: Set(req.credits),
            faculty_id: Set(req.faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取课程
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 通过编码获取课程
    pub async fn get_subject_by_code_impl(&self, code: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 分页列出课程
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Subjects::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Code.contains(&escaped)),
            );
        }

        // 院系筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 学期筛选
        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        // 授课教师筛选
        if let Some(faculty_id) = query.faculty_id {
            select = select.filter(Column::FacultyId.eq(faculty_id));
        }

        // 排序：院系、学期、名称
        select = select
            .order_by_asc(Column::Department)
            .order_by_asc(Column::Semester)
            .order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程页数失败: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(SubjectListResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全部课程，按院系、学期、名称排序
    pub async fn list_all_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(Column::Department)
            .order_by_asc(Column::Semester)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 更新课程信息
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        // 先检查课程是否存在
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }

        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }

        if let Some(faculty_id) = update.faculty_id {
            model.faculty_id = Set(faculty_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程数量
    pub async fn count_subjects_impl(&self) -> Result<u64> {
        let count = Subjects::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计课程数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计课程名下反馈数量
    pub async fn count_feedbacks_for_subject_impl(&self, subject_id: i64) -> Result<u64> {
        let count = feedbacks::Entity::find()
            .filter(feedbacks::Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计课程反馈数量失败: {e}")))?;

        Ok(count)
    }
}
