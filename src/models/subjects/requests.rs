use serde::Deserialize;

use crate::models::common::pagination::deserialize_string_to_i64;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub code: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub credits: i32,
    pub faculty_id: i64,
}

// 更新课程请求，未提供的字段保持原值
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
    pub faculty_id: Option<i64>,
}

// 课程列表查询参数
#[derive(Debug, Deserialize)]
pub struct SubjectListQuery {
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub faculty_id: Option<i64>,
    /// 按名称或编码模糊搜索
    pub search: Option<String>,
    #[serde(default = "default_page", deserialize_with = "deserialize_string_to_i64")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "deserialize_string_to_i64")]
    pub size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}
