use serde::Serialize;

use crate::models::admins::entities::Admin;
use crate::models::students::entities::Student;

// 登录成功后返回的账户信息
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AuthAccount {
    Student(Student),
    Admin(Admin),
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: AuthAccount,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct TokenVerificationResponse {
    pub is_valid: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: AuthAccount,
}
