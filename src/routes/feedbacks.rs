use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::services::FeedbackService;

// 懒加载的全局 FeedbackService 实例
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

pub async fn submit_feedback(
    req: HttpRequest,
    feedback_data: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .submit_feedback(&req, feedback_data.into_inner())
        .await
}

pub async fn list_pending_subjects(request: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list_pending_subjects(&request).await
}

pub async fn list_completed_feedbacks(request: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list_completed_feedbacks(&request).await
}

pub async fn get_dashboard(request: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.get_dashboard(&request).await
}

// 配置路由（仅学生）
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedbacks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&Role::Student))
                    .service(
                        web::resource("")
                            .wrap(middlewares::RateLimit::feedback_submit())
                            .route(web::post().to(submit_feedback)),
                    )
                    .route("/pending", web::get().to(list_pending_subjects))
                    .route("/completed", web::get().to(list_completed_feedbacks))
                    .route("/dashboard", web::get().to(get_dashboard)),
            ),
    );
}
