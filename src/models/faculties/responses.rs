use serde::Serialize;

use crate::models::common::pagination::PaginationInfo;
use crate::models::faculties::entities::Faculty;

#[derive(Debug, Serialize)]
pub struct FacultyListResponse {
    pub items: Vec<Faculty>,
    pub pagination: PaginationInfo,
}

/// 学生端可见的授课教师列表（仅含至少执教一门课程的教师）
#[derive(Debug, Serialize)]
pub struct TeachingFacultiesResponse {
    pub items: Vec<Faculty>,
}
