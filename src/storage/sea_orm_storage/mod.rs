//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod admins;
mod faculties;
mod feedbacks;
mod students;
mod subjects;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    admins::entities::Admin,
    auth::requests::StudentRegisterRequest,
    faculties::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
    feedbacks::{
        entities::Feedback,
        requests::{FeedbackListQuery, NewFeedback},
        responses::{CompletedFeedbackItem, FeedbackListResponse},
    },
    students::{
        entities::Student,
        requests::StudentListQuery,
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, req: StudentRegisterRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn get_student_by_roll(&self, roll: &str) -> Result<Option<Student>> {
        self.get_student_by_roll_impl(roll).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    // 管理员模块
    async fn create_admin(&self, name: &str, email: &str, password_hash: &str) -> Result<Admin> {
        self.create_admin_impl(name, email, password_hash).await
    }

    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>> {
        self.get_admin_by_id_impl(id).await
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.get_admin_by_email_impl(email).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    // 教师模块
    async fn create_faculty(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        self.create_faculty_impl(req).await
    }

    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_id_impl(id).await
    }

    async fn get_faculty_by_email(&self, email: &str) -> Result<Option<Faculty>> {
        self.get_faculty_by_email_impl(email).await
    }

    async fn list_faculties_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        self.list_faculties_with_pagination_impl(query).await
    }

    async fn list_all_faculties(&self) -> Result<Vec<Faculty>> {
        self.list_all_faculties_impl().await
    }

    async fn update_faculty(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        self.update_faculty_impl(id, update).await
    }

    async fn delete_faculty(&self, id: i64) -> Result<bool> {
        self.delete_faculty_impl(id).await
    }

    async fn count_faculties(&self) -> Result<u64> {
        self.count_faculties_impl().await
    }

    async fn count_subjects_for_faculty(&self, faculty_id: i64) -> Result<u64> {
        self.count_subjects_for_faculty_impl(faculty_id).await
    }

    async fn count_feedbacks_for_faculty(&self, faculty_id: i64) -> Result<u64> {
        self.count_feedbacks_for_faculty_impl(faculty_id).await
    }

    // 课程模块
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(code).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn list_all_subjects(&self) -> Result<Vec<Subject>> {
        self.list_all_subjects_impl().await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn count_subjects(&self) -> Result<u64> {
        self.count_subjects_impl().await
    }

    async fn count_feedbacks_for_subject(&self, subject_id: i64) -> Result<u64> {
        self.count_feedbacks_for_subject_impl(subject_id).await
    }

    // 反馈模块
    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback> {
        self.insert_feedback_impl(feedback).await
    }

    async fn get_feedback_by_student_and_subject(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<Feedback>> {
        self.get_feedback_by_student_and_subject_impl(student_id, subject_id)
            .await
    }

    async fn list_feedbacks_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<CompletedFeedbackItem>> {
        self.list_feedbacks_by_student_impl(student_id).await
    }

    async fn list_feedbacks_with_pagination(
        &self,
        query: FeedbackListQuery,
    ) -> Result<FeedbackListResponse> {
        self.list_feedbacks_with_pagination_impl(query).await
    }

    async fn list_all_feedbacks(&self) -> Result<Vec<Feedback>> {
        self.list_all_feedbacks_impl().await
    }

    async fn add_completed_subject(&self, student_id: i64, subject_id: i64) -> Result<()> {
        self.add_completed_subject_impl(student_id, subject_id).await
    }

    async fn get_completed_subject_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.get_completed_subject_ids_impl(student_id).await
    }
}
