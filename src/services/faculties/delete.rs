use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_faculty(
    service: &FacultyService,
    request: &HttpRequest,
    faculty_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教师必须存在
    match storage.get_faculty_by_id(faculty_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get faculty information: {e}"),
                )),
            );
        }
    }

    // 删除守卫：被课程或反馈引用的教师不可删除
    let subject_count = match storage.count_subjects_for_faculty(faculty_id).await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Faculty deletion failed: {e}"),
                )),
            );
        }
    };

    let feedback_count = match storage.count_feedbacks_for_faculty(faculty_id).await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Faculty deletion failed: {e}"),
                )),
            );
        }
    };

    if subject_count > 0 || feedback_count > 0 {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::FacultyInUse,
            format!(
                "Faculty is referenced by {subject_count} subject(s) and {feedback_count} feedback record(s)"
            ),
        )));
    }

    match storage.delete_faculty(faculty_id).await {
        Ok(true) => {
            info!("Faculty {} deleted", faculty_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Faculty deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FacultyDeleteFailed,
                format!("Faculty deletion failed: {e}"),
            )),
        ),
    }
}
