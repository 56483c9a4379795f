use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    mut update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程编码统一大写存储
    if let Some(code) = update_data.code.take() {
        update_data.code = Some(code.trim().to_uppercase());
    }

    if let Some(semester) = update_data.semester
        && !(1..=8).contains(&semester)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Semester must be between 1 and 8",
        )));
    }

    if let Some(credits) = update_data.credits
        && !(1..=6).contains(&credits)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Credits must be between 1 and 6",
        )));
    }

    // 编码变更时保证唯一（排除自身）
    if let Some(ref code) = update_data.code {
        match storage.get_subject_by_code(code).await {
            Ok(Some(existing)) if existing.id != subject_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectCodeAlreadyExists,
                    "Subject code already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to check subject code: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Subject update failed: {e}"),
                    )),
                );
            }
        }
    }

    // 改派授课教师时目标必须存在。已有反馈保留提交时刻的教师快照，不回溯。
    if let Some(faculty_id) = update_data.faculty_id {
        match storage.get_faculty_by_id(faculty_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FacultyNotFound,
                    "Assigned faculty not found",
                )));
            }
            Err(e) => {
                error!("Failed to check assigned faculty: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Subject update failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Subject update failed: {e}"),
            )),
        ),
    }
}
