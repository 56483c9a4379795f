use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::faculties::requests::{
    CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest,
};
use crate::services::FacultyService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FacultyService 实例
static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

pub async fn create_faculty(
    req: HttpRequest,
    faculty_data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .create_faculty(&req, faculty_data.into_inner())
        .await
}

pub async fn list_faculties(
    req: HttpRequest,
    query: web::Query<FacultyListQuery>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_faculties(&req, query.into_inner()).await
}

pub async fn get_faculty(req: HttpRequest, faculty_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.get_faculty(&req, faculty_id.0).await
}

pub async fn update_faculty(
    req: HttpRequest,
    faculty_id: SafeIDI64,
    update_data: web::Json<UpdateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .update_faculty(&req, faculty_id.0, update_data.into_inner())
        .await
}

pub async fn delete_faculty(req: HttpRequest, faculty_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.delete_faculty(&req, faculty_id.0).await
}

pub async fn list_teaching_faculties(req: HttpRequest) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_teaching_faculties(&req).await
}

// 配置路由：/teaching 面向学生，其余仅管理员
pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/faculties")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/teaching")
                    .wrap(middlewares::RequireRole::new(&Role::Student))
                    .route("", web::get().to(list_teaching_faculties)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&Role::Admin))
                    .route("", web::get().to(list_faculties))
                    .route("", web::post().to(create_faculty))
                    .route("/{id}", web::get().to(get_faculty))
                    .route("/{id}", web::put().to(update_faculty))
                    .route("/{id}", web::delete().to(delete_faculty)),
            ),
    );
}
