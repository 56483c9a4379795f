use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::feedbacks::responses::PendingSubjectsResponse;
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_pending_subjects(
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

    let completed: HashSet<i64> = match storage.get_completed_subject_ids(student_id).await {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve pending subjects: {e}"),
                )),
            );
        }
    };

    match storage.list_all_subjects().await {
        Ok(subjects) => {
            let mut items: Vec<Subject> = subjects
                .into_iter()
                .filter(|subject| !completed.contains(&subject.id))
                .collect();
            // 查询已按此序返回，过滤后重排一次固定展示顺序契约
            items.sort_by(Subject::display_order);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PendingSubjectsResponse { items },
                "Pending subjects retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve pending subjects: {e}"),
            )),
        ),
    }
}
