use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use crate::models::feedbacks::requests::FeedbackListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_feedbacks(
    service: &AnalyticsService,
    request: &HttpRequest,
    query: FeedbackListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_feedbacks_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Feedback list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve feedback list: {e}"),
            )),
        ),
    }
}
