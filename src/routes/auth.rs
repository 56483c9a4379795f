use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{AdminRegisterRequest, LoginRequest, StudentRegisterRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn student_login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login_student(login_data.into_inner(), &req)
        .await
}

pub async fn admin_login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login_admin(login_data.into_inner(), &req)
        .await
}

pub async fn register(
    req: HttpRequest,
    register_data: web::Json<StudentRegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .register(register_data.into_inner(), &req)
        .await
}

pub async fn admin_register(
    req: HttpRequest,
    register_data: web::Json<AdminRegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .register_admin(register_data.into_inner(), &req)
        .await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn verify_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_token(&request).await
}

pub async fn get_profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(&request).await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/student/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(student_login)),
            )
            .service(
                web::resource("/admin/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(admin_login)),
            )
            .service(
                web::resource("/register")
                    .wrap(middlewares::RateLimit::register())
                    .route(web::post().to(register)),
            )
            .service(
                web::resource("/admin/register")
                    .wrap(middlewares::RateLimit::register())
                    .route(web::post().to(admin_register)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(middlewares::RateLimit::refresh_token())
                    .route(web::post().to(refresh_token)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/verify-token", web::get().to(verify_token))
                    .route("/me", web::get().to(get_profile))
                    .route("/logout", web::post().to(logout)),
            ),
    );
}
