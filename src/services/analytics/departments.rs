use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use super::compute::compute_department_breakdown;
use crate::models::analytics::responses::DepartmentBreakdownResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_department_breakdown(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let feedbacks = match storage.list_all_feedbacks().await {
        Ok(feedbacks) => feedbacks,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute department breakdown: {e}"),
                )),
            );
        }
    };

    let subjects = match storage.list_all_subjects().await {
        Ok(subjects) => subjects,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute department breakdown: {e}"),
                )),
            );
        }
    };

    let items = compute_department_breakdown(&feedbacks, &subjects);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DepartmentBreakdownResponse { items },
        "Department breakdown computed successfully",
    )))
}
