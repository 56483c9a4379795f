use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::analytics::requests::{OverallStatsQuery, TopFacultyQuery};
use crate::models::auth::entities::Role;
use crate::models::feedbacks::requests::FeedbackListQuery;
use crate::services::AnalyticsService;

// 懒加载的全局 AnalyticsService 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

pub async fn get_overall_stats(
    req: HttpRequest,
    query: web::Query<OverallStatsQuery>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .get_overall_stats(&req, query.into_inner())
        .await
}

pub async fn get_department_breakdown(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.get_department_breakdown(&request).await
}

pub async fn get_top_faculty(
    req: HttpRequest,
    query: web::Query<TopFacultyQuery>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .get_top_faculty(&req, query.into_inner())
        .await
}

pub async fn get_dashboard(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.get_dashboard(&request).await
}

pub async fn list_feedbacks(
    req: HttpRequest,
    query: web::Query<FeedbackListQuery>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.list_feedbacks(&req, query.into_inner()).await
}

// 配置路由（仅管理员）
pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analytics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&Role::Admin))
                    .route("/overall", web::get().to(get_overall_stats))
                    .route("/departments", web::get().to(get_department_breakdown))
                    .route("/top-faculty", web::get().to(get_top_faculty))
                    .route("/dashboard", web::get().to(get_dashboard))
                    .route("/feedbacks", web::get().to(list_feedbacks)),
            ),
    );
}
