/*!
 * JWT 认证中间件
 *
 * 验证 Bearer token，并根据 token 中的角色从对应账户表加载身份，
 * 写入请求扩展供后续处理程序使用。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件提取并验证JWT令牌
 * 3. 令牌有效时按角色加载学生或管理员账户，存入请求扩展
 * 4. 令牌无效或缺失时返回401未授权错误
 *
 * ## 配置
 *
 * 确保在环境变量中设置了 `JWT_SECRET`，JWT服务将使用此密钥来验证令牌。
 */

use super::create_error_response;
use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::auth::entities::{AuthIdentity, Role};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::str::FromStr;
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<AuthIdentity, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取账户信息
    match cache.get_raw(&format!("identity:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<AuthIdentity>(&json) {
            Ok(identity) => return Ok(identity),
            Err(_) => {
                cache.remove(&format!("identity:{token}")).await;
                info!(
                    "Failed to deserialize identity from cache for token: {}",
                    token
                );
            }
        },
        _ => {
            info!("Identity not found in cache for token: {}", token);
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let account_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid account ID in JWT".to_string())?;

    let role = Role::from_str(&claims.role).map_err(|_| "Invalid role in JWT".to_string())?;

    let identity = match role {
        Role::Student => {
            let student = storage
                .get_student_by_id(account_id)
                .await
                .map_err(|_| "Failed to retrieve account from storage".to_string())?
                .ok_or_else(|| "Account not found".to_string())?;
            AuthIdentity::Student(student)
        }
        Role::Admin => {
            let admin = storage
                .get_admin_by_id(account_id)
                .await
                .map_err(|_| "Failed to retrieve account from storage".to_string())?
                .ok_or_else(|| "Account not found".to_string())?;
            AuthIdentity::Admin(admin)
        }
    };

    // 将账户信息存入缓存
    let app_config = AppConfig::get();
    if let Ok(identity_json) = serde_json::to_string(&identity) {
        cache
            .insert_raw(
                format!("identity:{token}"),
                identity_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(identity)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(
                    req.into_response(HttpResponse::NoContent().finish().map_into_right_body())
                );
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(identity) => {
                    debug!("JWT authentication successful for ID: {}", identity.id());
                    req.extensions_mut().insert(identity);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取身份信息
impl RequireJWT {
    /// 从请求扩展中提取已认证身份
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_identity(req: &actix_web::HttpRequest) -> Option<AuthIdentity> {
        req.extensions().get::<AuthIdentity>().cloned()
    }

    /// 从请求扩展中提取账户ID
    pub fn extract_account_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions()
            .get::<AuthIdentity>()
            .map(|identity| identity.id())
    }

    /// 从请求扩展中提取角色
    pub fn extract_role(req: &actix_web::HttpRequest) -> Option<Role> {
        req.extensions()
            .get::<AuthIdentity>()
            .map(|identity| identity.role())
    }
}
