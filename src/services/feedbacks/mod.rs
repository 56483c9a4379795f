pub mod completed;
pub mod dashboard;
pub mod pending;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
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

    // 提交课程反馈
    pub async fn submit_feedback(
        &self,
        request: &HttpRequest,
        feedback_data: SubmitFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_feedback(self, request, feedback_data).await
    }

    // 获取待评课程列表
    pub async fn list_pending_subjects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        pending::list_pending_subjects(self, request).await
    }

    // 获取已评反馈列表
    pub async fn list_completed_feedbacks(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        completed::list_completed_feedbacks(self, request).await
    }

    // 学生个人面板
    pub async fn get_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, request).await
    }
}
