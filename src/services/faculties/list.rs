use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::faculties::requests::FacultyListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_faculties(
    service: &FacultyService,
    request: &HttpRequest,
    query: FacultyListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_faculties_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Faculty list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve faculty list: {e}"),
            )),
        ),
    }
}
