use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FacultyService;
use crate::models::faculties::requests::CreateFacultyRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn create_faculty(
    service: &FacultyService,
    request: &HttpRequest,
    faculty_data: CreateFacultyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if faculty_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Faculty name must not be empty",
        )));
    }

    // 邮箱可选，提供时校验格式并保证唯一
    if let Some(ref email) = faculty_data.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }

        match storage.get_faculty_by_email(email).await {
            Ok(Some(_)) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::FacultyEmailAlreadyExists,
                    "Faculty email already exists",
                )));
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check faculty email: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Faculty creation failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_faculty(faculty_data).await {
        Ok(faculty) => {
            info!("Faculty {} created ({})", faculty.name, faculty.department);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(faculty, "Faculty created successfully")))
        }
        Err(e) => {
            let msg = format!("Faculty creation failed: {e}");
            error!("{}", msg);
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::FacultyEmailAlreadyExists,
                    "Faculty email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::FacultyCreationFailed, msg)))
            }
        }
    }
}
