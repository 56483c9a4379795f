use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use super::compute::{compute_department_breakdown, compute_overall_stats, compute_top_faculty};
use crate::config::AppConfig;
use crate::models::analytics::responses::AdminDashboardResponse;
use crate::models::feedbacks::requests::FeedbackListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_dashboard(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    macro_rules! fetch_or_fail {
        ($expr:expr) => {
            match $expr.await {
                Ok(value) => value,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to retrieve dashboard: {e}"),
                        ),
                    ));
                }
            }
        };
    }

    let total_students = fetch_or_fail!(storage.count_students()) as i64;
    let total_faculties = fetch_or_fail!(storage.count_faculties()) as i64;
    let total_subjects = fetch_or_fail!(storage.count_subjects()) as i64;

    let feedbacks = fetch_or_fail!(storage.list_all_feedbacks());
    let subjects = fetch_or_fail!(storage.list_all_subjects());
    let faculties = fetch_or_fail!(storage.list_all_faculties());
    let recent = fetch_or_fail!(storage.list_feedbacks_with_pagination(FeedbackListQuery {
        subject_id: None,
        faculty_id: None,
        page: 1,
        size: 10,
    }));

    let limit = AppConfig::get().feedback.top_faculty_limit;
    let response = AdminDashboardResponse {
        total_students,
        total_faculties,
        total_subjects,
        total_feedbacks: feedbacks.len() as i64,
        overall: compute_overall_stats(&feedbacks),
        departments: compute_department_breakdown(&feedbacks, &subjects),
        top_faculty: compute_top_faculty(&feedbacks, &faculties, limit),
        recent_feedbacks: recent.items,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Dashboard retrieved successfully",
    )))
}
