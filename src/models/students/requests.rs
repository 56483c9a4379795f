use serde::Deserialize;

use crate::models::common::pagination::deserialize_string_to_i64;

// 学生列表查询参数
#[derive(Debug, Deserialize)]
pub struct StudentListQuery {
    pub department: Option<String>,
    pub year: Option<i32>,
    /// 按姓名或学号模糊搜索
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
