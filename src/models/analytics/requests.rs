use serde::Deserialize;

// 全局统计查询参数，可按课程或教师过滤
#[derive(Debug, Default, Deserialize)]
pub struct OverallStatsQuery {
    pub subject_id: Option<i64>,
    pub faculty_id: Option<i64>,
}

// 教师排行查询参数
#[derive(Debug, Default, Deserialize)]
pub struct TopFacultyQuery {
    pub limit: Option<i64>,
}
