use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest,
};
use crate::services::SubjectService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, subject_data.into_inner())
        .await
}

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req, query.into_inner()).await
}

pub async fn get_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(&req, subject_id.0).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.0, update_data.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

// 配置路由：列表与详情对已登录用户开放，写操作仅管理员
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_subjects))
            .route("/{id}", web::get().to(get_subject))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&Role::Admin))
                    .route("", web::post().to(create_subject))
                    .route("/{id}", web::put().to(update_subject))
                    .route("/{id}", web::delete().to(delete_subject)),
            ),
    );
}
