use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::faculties::requests::UpdateFacultyRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn update_faculty(
    service: &FacultyService,
    request: &HttpRequest,
    faculty_id: i64,
    update_data: UpdateFacultyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 邮箱变更时校验格式并保证唯一（排除自身）
    if let Some(ref email) = update_data.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }

        match storage.get_faculty_by_email(email).await {
            Ok(Some(existing)) if existing.id != faculty_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::FacultyEmailAlreadyExists,
                    "Faculty email already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to check faculty email: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Faculty update failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_faculty(faculty_id, update_data).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Faculty update failed: {e}"),
            )),
        ),
    }
}
