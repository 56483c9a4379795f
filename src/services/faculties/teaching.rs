use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::FacultyService;
use crate::models::faculties::responses::TeachingFacultiesResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 学生端只展示至少执教一门课程的教师，按姓名升序
pub async fn list_teaching_faculties(
    service: &FacultyService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teaching_ids: HashSet<i64> = match storage.list_all_subjects().await {
        Ok(subjects) => subjects.into_iter().map(|subject| subject.faculty_id).collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve faculty list: {e}"),
                )),
            );
        }
    };

    match storage.list_all_faculties().await {
        Ok(faculties) => {
            let items = faculties
                .into_iter()
                .filter(|faculty| teaching_ids.contains(&faculty.id))
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TeachingFacultiesResponse { items },
                "Faculty list retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve faculty list: {e}"),
            )),
        ),
    }
}
