use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use super::compute::compute_overall_stats;
use crate::models::analytics::requests::OverallStatsQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_overall_stats(
    service: &AnalyticsService,
    request: &HttpRequest,
    query: OverallStatsQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut feedbacks = match storage.list_all_feedbacks().await {
        Ok(feedbacks) => feedbacks,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute statistics: {e}"),
                )),
            );
        }
    };

    if let Some(subject_id) = query.subject_id {
        feedbacks.retain(|feedback| feedback.subject_id == subject_id);
    }
    if let Some(faculty_id) = query.faculty_id {
        feedbacks.retain(|feedback| feedback.faculty_id == faculty_id);
    }

    match compute_overall_stats(&feedbacks) {
        Some(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Statistics computed successfully",
        ))),
        // 空子集返回无数据而不是 NaN
        None => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("No feedback data available"))
        ),
    }
}
