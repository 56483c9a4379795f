use serde::Deserialize;

use crate::models::common::pagination::deserialize_string_to_i64;
use crate::models::feedbacks::entities::Ratings;

// 提交反馈请求，评分各项平铺在请求体中
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub subject_id: i64,
    pub q1: i32,
    pub q2: i32,
    pub q3: i32,
    pub q4: i32,
    pub q5: i32,
    pub comment: Option<String>,
}

impl SubmitFeedbackRequest {
    pub fn ratings(&self) -> Ratings {
        Ratings {
            q1: self.q1,
            q2: self.q2,
            q3: self.q3,
            q4: self.q4,
            q5: self.q5,
        }
    }
}

// 校验通过后写入账本的记录，均分由业务层算好
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub student_id: i64,
    pub subject_id: i64,
    pub faculty_id: i64,
    pub ratings: Ratings,
    pub average_rating: f64,
    pub comment: Option<String>,
}

// 反馈列表查询参数（管理端）
#[derive(Debug, Deserialize)]
pub struct FeedbackListQuery {
    pub subject_id: Option<i64>,
    pub faculty_id: Option<i64>,
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
