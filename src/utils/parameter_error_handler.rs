use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "请求 Content-Type 必须为 application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("请求体解析失败: {e}"),
        JsonPayloadError::OverflowKnownLength { length, limit } => {
            format!("请求体过大: {length} 字节，上限 {limit} 字节")
        }
        other => format!("请求体无效: {other}"),
    };

    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("查询参数解析失败: {e}"),
        other => format!("查询参数无效: {other}"),
    };

    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}
