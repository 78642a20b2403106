//! 请求参数解析错误的统一处理
//!
//! Json / Query 解析失败时返回 ApiResponse 格式的 400 响应，
//! 而不是 actix 默认的纯文本。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        format!("请求体解析失败: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        format!("查询参数解析失败: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}
