use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    mut subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程编码统一大写存储
    subject_data.code = subject_data.code.trim().to_uppercase();

    if subject_data.code.is_empty() || subject_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Subject code and name must not be empty",
        )));
    }

    if !(1..=8).contains(&subject_data.semester) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Semester must be between 1 and 8",
        )));
    }

    if !(1..=6).contains(&subject_data.credits) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Credits must be between 1 and 6",
        )));
    }

    // 授课教师必须存在
    match storage.get_faculty_by_id(subject_data.faculty_id).await {
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
                    format!("Subject creation failed: {e}"),
                )),
            );
        }
    }

    // 课程编码唯一
    match storage.get_subject_by_code(&subject_data.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectCodeAlreadyExists,
                "Subject code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check subject code: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Subject creation failed: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} ({}) created", subject.name, subject.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => {
            let msg = format!("Subject creation failed: {e}");
            error!("{}", msg);
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectCodeAlreadyExists,
                    "Subject code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::SubjectCreationFailed, msg)))
            }
        }
    }
}
