use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径 ID 提取器，解析失败时返回统一的错误响应而不是 404
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok());

        match parsed {
            Some(id) if id > 0 => ready(Ok(SafeIDI64(id))),
            _ => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "无效的ID参数",
                ));
                ready(Err(InternalError::from_response("invalid id", response).into()))
            }
        }
    }
}
