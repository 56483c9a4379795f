use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::feedbacks::responses::CompletedFeedbackResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_completed_feedbacks(
    service: &FeedbackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(student_id) = RequireJWT::extract_account_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    match storage.list_feedbacks_by_student(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CompletedFeedbackResponse { items },
            "Completed feedbacks retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve completed feedbacks: {e}"),
            )),
        ),
    }
}
