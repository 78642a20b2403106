//! 路径参数提取器
//!
//! actix 默认的 Path 解析失败会返回纯文本 400，这里统一换成
//! ApiResponse 格式的错误体。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从 `{id}` 路径段解析 i64，非数字一律 400
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => Err(ErrorBadRequest(
                serde_json::to_string(&ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "路径参数 id 必须为正整数",
                ))
                .unwrap_or_default(),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn parses_positive_id() {
        let req = TestRequest::default()
            .uri("/api/v1/users/42")
            .param("id", "42")
            .to_http_request();
        let result = SafeIDI64::from_request(&req, &mut Payload::None).await;
        assert_eq!(result.unwrap().0, 42);
    }

    #[actix_web::test]
    async fn rejects_non_numeric_id() {
        let req = TestRequest::default()
            .uri("/api/v1/users/abc")
            .param("id", "abc")
            .to_http_request();
        assert!(SafeIDI64::from_request(&req, &mut Payload::None).await.is_err());
    }

    #[actix_web::test]
    async fn rejects_zero_and_negative() {
        for raw in ["0", "-1"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(SafeIDI64::from_request(&req, &mut Payload::None).await.is_err());
        }
    }
}
