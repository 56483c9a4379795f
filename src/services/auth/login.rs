use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        LoginRequest, LoginResponse,
        entities::Role,
        responses::AuthAccount,
    },
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    role: Role,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 按角色从对应账户表查询
    let lookup = match role {
        Role::Student => storage
            .get_student_by_email(&login_request.email)
            .await
            .map(|opt| opt.map(|s| (s.password_hash.clone(), AuthAccount::Student(s)))),
        Role::Admin => storage
            .get_admin_by_email(&login_request.email)
            .await
            .map(|opt| opt.map(|a| (a.password_hash.clone(), AuthAccount::Admin(a)))),
    };

    match lookup {
        Ok(Some((password_hash, account))) => {
            // 2. 验证密码
            if verify_password(&login_request.password, &password_hash) {
                // 3. 生成令牌对
                let refresh_expiry = login_request
                    .remember_me
                    .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry));

                let token_pair = match &account {
                    AuthAccount::Student(student) => student.generate_token_pair(refresh_expiry),
                    AuthAccount::Admin(admin) => admin.generate_token_pair(refresh_expiry),
                };

                match token_pair {
                    Ok(token_pair) => {
                        tracing::info!("{} account logged in: {}", role, login_request.email);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                            user: account,
                            created_at: chrono::Utc::now(),
                        };

                        // 4. 创建 refresh token cookie
                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Email or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
