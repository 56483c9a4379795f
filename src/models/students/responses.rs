use serde::Serialize;

use crate::models::common::pagination::PaginationInfo;
use crate::models::feedbacks::responses::CompletedFeedbackItem;
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}

/// 学生个人面板：资料、待评课程、已评反馈与计数
#[derive(Debug, Serialize)]
pub struct StudentDashboardResponse {
    pub student: Student,
    pub total_subjects: i64,
    pub completed_count: i64,
    pub pending_count: i64,
    pub pending_subjects: Vec<Subject>,
    pub completed_feedbacks: Vec<CompletedFeedbackItem>,
}
