use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{AdminRegisterRequest, StudentRegisterRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_roll};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    mut register_request: StudentRegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 验证学号合法性
    if let Err(msg) = validate_roll(&register_request.roll) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 验证邮箱
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 3. 验证年级取值
    if !(1..=4).contains(&register_request.year) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Year must be between 1 and 4",
        )));
    }

    // 4. 验证密码策略
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 5. 检查学号是否已存在
    if let Err(response) = check_roll_exists(&storage, &register_request.roll).await {
        return Ok(response);
    }

    // 6. 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &register_request.email).await {
        return Ok(response);
    }

    // 7. 哈希密码
    match hash_password(&register_request.password) {
        Ok(password_hash) => {
            // 将明文密码替换为哈希后的密码
            register_request.password = password_hash;

            // 8. 创建学生
            match storage.create_student(register_request).await {
                Ok(student) => {
                    Ok(HttpResponse::Created().json(ApiResponse::success(student, "注册成功")))
                }
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("注册失败: {e}"),
                    )),
                ),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("密码哈希失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_admin_register(
    service: &AuthService,
    register_request: AdminRegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 验证姓名非空
    if register_request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Name cannot be empty",
        )));
    }

    // 2. 验证邮箱
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 3. 验证密码策略
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 4. 检查邮箱是否已存在
    match storage.get_admin_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AdminEmailAlreadyExists,
                "Admin with this email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    }

    // 5. 哈希密码并创建管理员
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    match storage
        .create_admin(
            register_request.name.trim(),
            &register_request.email,
            &password_hash,
        )
        .await
    {
        Ok(admin) => Ok(HttpResponse::Created().json(ApiResponse::success(
            admin,
            "Admin registered successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("注册失败: {e}"),
            )),
        ),
    }
}

async fn check_roll_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    roll: &str,
) -> Result<(), HttpResponse> {
    match storage.get_student_by_roll(roll).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentRollAlreadyExists,
            "Roll number already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_student_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentEmailAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}
