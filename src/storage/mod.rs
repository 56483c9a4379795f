use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生，password 字段传入的是哈希值
    async fn create_student(&self, req: StudentRegisterRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生信息
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_roll(&self, roll: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;

    /// 管理员管理方法
    // 创建管理员
    async fn create_admin(&self, name: &str, email: &str, password_hash: &str) -> Result<Admin>;
    // 通过ID获取管理员信息
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>>;
    // 通过邮箱获取管理员信息
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
    // 统计管理员数量
    async fn count_admins(&self) -> Result<u64>;

    /// 教师管理方法
    // 创建教师
    async fn create_faculty(&self, req: CreateFacultyRequest) -> Result<Faculty>;
    // 通过ID获取教师信息
    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>>;
    // 通过邮箱获取教师信息
    async fn get_faculty_by_email(&self, email: &str) -> Result<Option<Faculty>>;
    // 分页列出教师
    async fn list_faculties_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse>;
    // 列出全部教师
    async fn list_all_faculties(&self) -> Result<Vec<Faculty>>;
    // 更新教师信息
    async fn update_faculty(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>>;
    // 删除教师
    async fn delete_faculty(&self, id: i64) -> Result<bool>;
    // 统计教师数量
    async fn count_faculties(&self) -> Result<u64>;
    // 统计教师名下的课程数量（删除守卫）
    async fn count_subjects_for_faculty(&self, faculty_id: i64) -> Result<u64>;
    // 统计教师名下的反馈数量（删除守卫）
    async fn count_feedbacks_for_faculty(&self, faculty_id: i64) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取课程信息
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 通过编码获取课程信息
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    // 分页列出课程
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 列出全部课程
    async fn list_all_subjects(&self) -> Result<Vec<Subject>>;
    // 更新课程信息
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除课程
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    // 统计课程数量
    async fn count_subjects(&self) -> Result<u64>;
    // 统计课程名下的反馈数量（删除守卫）
    async fn count_feedbacks_for_subject(&self, subject_id: i64) -> Result<u64>;

    /// 反馈账本方法
    // 写入反馈，唯一索引冲突由调用方判定
    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback>;
    // 查询某学生对某课程的反馈
    async fn get_feedback_by_student_and_subject(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<Feedback>>;
    // 某学生的已评列表，按提交时间倒序
    async fn list_feedbacks_by_student(&self, student_id: i64)
    -> Result<Vec<CompletedFeedbackItem>>;
    // 管理端反馈列表
    async fn list_feedbacks_with_pagination(
        &self,
        query: FeedbackListQuery,
    ) -> Result<FeedbackListResponse>;
    // 全量反馈，供聚合统计使用
    async fn list_all_feedbacks(&self) -> Result<Vec<Feedback>>;

    /// 已完成课程登记
    // 登记学生已完成某课程的反馈，重复登记静默忽略
    async fn add_completed_subject(&self, student_id: i64, subject_id: i64) -> Result<()>;
    // 查询学生已完成的课程 id 列表
    async fn get_completed_subject_ids(&self, student_id: i64) -> Result<Vec<i64>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
