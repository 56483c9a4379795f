pub mod compute;
pub mod dashboard;
pub mod departments;
pub mod list;
pub mod overall;
pub mod top_faculty;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::analytics::requests::{OverallStatsQuery, TopFacultyQuery};
use crate::models::feedbacks::requests::FeedbackListQuery;
use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 全局统计
    pub async fn get_overall_stats(
        &self,
        request: &HttpRequest,
        query: OverallStatsQuery,
    ) -> ActixResult<HttpResponse> {
        overall::get_overall_stats(self, request, query).await
    }

    // 按院系汇总
    pub async fn get_department_breakdown(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        departments::get_department_breakdown(self, request).await
    }

    // 教师排行
    pub async fn get_top_faculty(
        &self,
        request: &HttpRequest,
        query: TopFacultyQuery,
    ) -> ActixResult<HttpResponse> {
        top_faculty::get_top_faculty(self, request, query).await
    }

    // 管理端面板
    pub async fn get_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, request).await
    }

    // 反馈列表（管理端）
    pub async fn list_feedbacks(
        &self,
        request: &HttpRequest,
        query: FeedbackListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_feedbacks(self, request, query).await
    }
}
