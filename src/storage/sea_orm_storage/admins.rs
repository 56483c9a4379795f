use super::SeaOrmStorage;
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{PortalError, Result};
use crate::models::admins::entities::Admin;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建管理员
    pub async fn create_admin_impl(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建管理员失败: {e}")))?;

        Ok(result.into_admin())
    }

    /// 通过 ID 获取管理员
    pub async fn get_admin_by_id_impl(&self, id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过邮箱获取管理员
    pub async fn get_admin_by_email_impl(&self, email: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 统计管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        let count = Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计管理员数量失败: {e}")))?;

        Ok(count)
    }
}
