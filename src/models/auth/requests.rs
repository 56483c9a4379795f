use serde::Deserialize;

// 登录请求，学生端与管理端共用
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 管理员注册请求
#[derive(Debug, Deserialize)]
pub struct AdminRegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// 学生注册请求
#[derive(Debug, Deserialize)]
pub struct StudentRegisterRequest {
    pub name: String,
    /// 学号
    pub roll: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub year: i32,
}
