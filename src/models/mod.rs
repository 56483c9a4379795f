pub mod common;

pub mod admins;
pub mod analytics;
pub mod auth;
pub mod faculties;
pub mod feedbacks;
pub mod students;
pub mod subjects;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
