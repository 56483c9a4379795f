use super::SeaOrmStorage;
use crate::entity::faculties::{ActiveModel, Column, Entity as Faculties};
use crate::entity::{feedbacks, subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    faculties::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_faculty_impl(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            department: Set(req.department),
            designation: Set(req.designation.to_string()),
            email: Set(req.email),
            phone: Set(req.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_faculty())
    }

    /// 通过 ID 获取教师
    pub async fn get_faculty_by_id_impl(&self, id: i64) -> Result<Option<Faculty>> {
        let result = Faculties::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    /// 通过邮箱获取教师
    pub async fn get_faculty_by_email_impl(&self, email: &str) -> Result<Option<Faculty>> {
        let result = Faculties::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    /// 分页列出教师
    pub async fn list_faculties_with_pagination_impl(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Faculties::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 院系筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 排序
        select = select.order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师页数失败: {e}")))?;

        let faculties = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(FacultyListResponse {
            items: faculties.into_iter().map(|m| m.into_faculty()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全部教师
    pub async fn list_all_faculties_impl(&self) -> Result<Vec<Faculty>> {
        let faculties = Faculties::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(faculties.into_iter().map(|m| m.into_faculty()).collect())
    }

    /// 更新教师信息
    pub async fn update_faculty_impl(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        // 先检查教师是否存在
        let existing = self.get_faculty_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(designation) = update.designation {
            model.designation = Set(designation.to_string());
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_faculty_by_id_impl(id).await
    }

    /// 删除教师
    pub async fn delete_faculty_impl(&self, id: i64) -> Result<bool> {
        let result = Faculties::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师数量
    pub async fn count_faculties_impl(&self) -> Result<u64> {
        let count = Faculties::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计教师名下课程数量
    pub async fn count_subjects_for_faculty_impl(&self, faculty_id: i64) -> Result<u64> {
        let count = subjects::Entity::find()
            .filter(subjects::Column::FacultyId.eq(faculty_id))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计教师课程数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计教师名下反馈数量
    pub async fn count_feedbacks_for_faculty_impl(&self, faculty_id: i64) -> Result<u64> {
        let count = feedbacks::Entity::find()
            .filter(feedbacks::Column::FacultyId.eq(faculty_id))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计教师反馈数量失败: {e}")))?;

        Ok(count)
    }
}
