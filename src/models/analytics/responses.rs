use serde::Serialize;

use crate::models::faculties::entities::Designation;
use crate::models::feedbacks::responses::CompletedFeedbackItem;

/// 各评分项均值
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionAverages {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub q5: f64,
}

/// 均分分布区间，`bucket` 为区间下界，取值 1..=5。
/// 区间为左闭右开 [k, k+1)，满分 5.0 落在最后一档 [5, 6)。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistributionBucket {
    pub bucket: i32,
    pub count: i64,
}

/// 全局统计
#[derive(Debug, Serialize)]
pub struct OverallStatsResponse {
    pub total_feedbacks: i64,
    pub overall_average: f64,
    pub question_averages: QuestionAverages,
    pub distribution: Vec<DistributionBucket>,
}

/// 按院系汇总
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepartmentStat {
    pub department: String,
    pub feedback_count: i64,
    pub average_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct DepartmentBreakdownResponse {
    pub items: Vec<DepartmentStat>,
}

/// 教师排行条目
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacultyStat {
    pub faculty_id: i64,
    pub faculty_name: String,
    pub department: String,
    pub designation: Designation,
    pub feedback_count: i64,
    pub average_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct TopFacultyResponse {
    pub items: Vec<FacultyStat>,
}

/// 管理端面板：实体计数、最新反馈与各项汇总的一次性快照
#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub total_students: i64,
    pub total_faculties: i64,
    pub total_subjects: i64,
    pub total_feedbacks: i64,
    /// 账本为空时为 None
    pub overall: Option<OverallStatsResponse>,
    pub departments: Vec<DepartmentStat>,
    pub top_faculty: Vec<FacultyStat>,
    /// 最新提交的反馈（最多 10 条）
    pub recent_feedbacks: Vec<CompletedFeedbackItem>,
}
