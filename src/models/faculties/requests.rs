use serde::Deserialize;

use crate::models::common::pagination::deserialize_string_to_i64;
use crate::models::faculties::entities::Designation;

// 创建教师请求
#[derive(Debug, Deserialize)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub department: String,
    pub designation: Designation,
    pub email: Option<String>,
    pub phone: Option<String>,
}

// 更新教师请求，未提供的字段保持原值
#[derive(Debug, Deserialize)]
pub struct UpdateFacultyRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<Designation>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

// 教师列表查询参数
#[derive(Debug, Deserialize)]
pub struct FacultyListQuery {
    pub department: Option<String>,
    /// 按姓名模糊搜索
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
