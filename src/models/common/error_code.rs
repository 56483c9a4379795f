use serde::{Deserialize, Serialize};

// 业务错误码
//
// 按域分段：1xxx 通用，2xxx 认证，3xxx 学生，4xxx 教师档案，
// 5xxx 课程，6xxx 反馈。HTTP 状态码由各 handler 另行决定。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,
    ValidationFailed = 1006,

    // 认证
    AuthFailed = 2000,
    RegisterFailed = 2001,
    TokenInvalid = 2002,
    AdminEmailAlreadyExists = 2003,

    // 学生
    StudentNotFound = 3000,
    StudentEmailAlreadyExists = 3001,
    StudentRollAlreadyExists = 3002,

    // 教师档案
    FacultyNotFound = 4000,
    FacultyEmailAlreadyExists = 4001,
    FacultyInUse = 4002,
    FacultyCreationFailed = 4003,
    FacultyDeleteFailed = 4004,

    // 课程
    SubjectNotFound = 5000,
    SubjectCodeAlreadyExists = 5001,
    SubjectInUse = 5002,
    SubjectCreationFailed = 5003,
    SubjectDeleteFailed = 5004,

    // 反馈
    FeedbackNotFound = 6000,
    FeedbackAlreadySubmitted = 6001,
    RatingInvalid = 6002,
    CommentTooLong = 6003,
    FeedbackSubmitFailed = 6004,
}
