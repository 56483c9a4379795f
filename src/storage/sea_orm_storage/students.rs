use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    auth::requests::StudentRegisterRequest,
    students::{entities::Student, requests::StudentListQuery, responses::StudentListResponse},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生，`req.password` 为已哈希的密码
    pub async fn create_student_impl(&self, req: StudentRegisterRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            roll: Set(req.roll),
            email: Set(req.email),
            password_hash: Set(req.password),
            department: Set(req.department),
            year: Set(req.year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student(Vec::new()))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => {
                let completed = self.get_completed_subject_ids_impl(model.id).await?;
                Ok(Some(model.into_student(completed)))
            }
            None => Ok(None),
        }
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => {
                let completed = self.get_completed_subject_ids_impl(model.id).await?;
                Ok(Some(model.into_student(completed)))
            }
            None => Ok(None),
        }
    }

    /// 通过学号获取学生
    pub async fn get_student_by_roll_impl(&self, roll: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Roll.eq(roll))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => {
                let completed = self.get_completed_subject_ids_impl(model.id).await?;
                Ok(Some(model.into_student(completed)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Roll.contains(&escaped)),
            );
        }

        // 院系筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 年级筛选
        if let Some(year) = query.year {
            select = select.filter(Column::Year.eq(year));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生列表失败: {e}")))?;

        // 列表视图不展开已完成课程集合
        Ok(StudentListResponse {
            items: students
                .into_iter()
                .map(|m| m.into_student(Vec::new()))
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }
}
