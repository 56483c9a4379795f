use serde::Serialize;

use crate::models::common::pagination::PaginationInfo;
use crate::models::feedbacks::entities::Feedback;
use crate::models::subjects::entities::Subject;

#[derive(Debug, Serialize)]
pub struct SubmitFeedbackResponse {
    pub feedback: Feedback,
}

/// 待评课程列表
#[derive(Debug, Serialize)]
pub struct PendingSubjectsResponse {
    pub items: Vec<Subject>,
}

/// 已评条目，附带课程与教师快照信息
#[derive(Debug, Serialize)]
pub struct CompletedFeedbackItem {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub subject_code: String,
    pub subject_name: String,
    pub faculty_name: String,
}

#[derive(Debug, Serialize)]
pub struct CompletedFeedbackResponse {
    pub items: Vec<CompletedFeedbackItem>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub items: Vec<CompletedFeedbackItem>,
    pub pagination: PaginationInfo,
}
