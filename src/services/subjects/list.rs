use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::SubjectListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve subject list: {e}"),
            )),
        ),
    }
}
