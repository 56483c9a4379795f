use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程必须存在
    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get subject information: {e}"),
                )),
            );
        }
    }

    // 删除守卫：已有反馈的课程不可删除，否则会破坏账本的引用完整性
    let feedback_count = match storage.count_feedbacks_for_subject(subject_id).await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Subject deletion failed: {e}"),
                )),
            );
        }
    };

    if feedback_count > 0 {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SubjectInUse,
            format!("Subject is referenced by {feedback_count} feedback record(s)"),
        )));
    }

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            info!("Subject {} deleted", subject_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::SubjectDeleteFailed,
                format!("Subject deletion failed: {e}"),
            )),
        ),
    }
}
