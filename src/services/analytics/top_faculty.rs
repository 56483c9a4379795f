use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use super::compute::compute_top_faculty;
use crate::config::AppConfig;
use crate::models::analytics::requests::TopFacultyQuery;
use crate::models::analytics::responses::TopFacultyResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_top_faculty(
    service: &AnalyticsService,
    request: &HttpRequest,
    query: TopFacultyQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limit = query
        .limit
        .unwrap_or(AppConfig::get().feedback.top_faculty_limit);

    if limit < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Limit must be at least 1",
        )));
    }

    let feedbacks = match storage.list_all_feedbacks().await {
        Ok(feedbacks) => feedbacks,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute faculty ranking: {e}"),
                )),
            );
        }
    };

    let faculties = match storage.list_all_faculties().await {
        Ok(faculties) => faculties,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute faculty ranking: {e}"),
                )),
            );
        }
    };

    let items = compute_top_faculty(&feedbacks, &faculties, limit);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TopFacultyResponse { items },
        "Faculty ranking computed successfully",
    )))
}
