use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::auth::entities::AuthIdentity;
use crate::models::students::responses::StudentDashboardResponse;
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_dashboard(
    service: &FeedbackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match RequireJWT::extract_identity(request) {
        Some(AuthIdentity::Student(student)) => student,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

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

    let completed: HashSet<i64> = fetch_or_fail!(storage.get_completed_subject_ids(student.id))
        .into_iter()
        .collect();
    let subjects = fetch_or_fail!(storage.list_all_subjects());
    let completed_feedbacks = fetch_or_fail!(storage.list_feedbacks_by_student(student.id));

    let total_subjects = subjects.len() as i64;
    let mut pending_subjects: Vec<Subject> = subjects
        .into_iter()
        .filter(|subject| !completed.contains(&subject.id))
        .collect();
    pending_subjects.sort_by(Subject::display_order);

    let response = StudentDashboardResponse {
        total_subjects,
        completed_count: completed.len() as i64,
        pending_count: pending_subjects.len() as i64,
        student,
        pending_subjects,
        completed_feedbacks,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Dashboard retrieved successfully",
    )))
}
