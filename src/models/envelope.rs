//! Uniform response envelope: `{ "status", "msg", "body" }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MSG_SUCCESS: &str = "success";

/// Every endpoint answers with this shape, on success and on failure.
///
/// `status` mirrors the HTTP status of the response. `body` is serialized
/// as `null` when there is no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub msg: String,
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(body: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            msg: MSG_SUCCESS.to_string(),
            body: Some(body),
        }
    }

    pub fn error(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            msg: msg.into(),
            body: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without payload (`"body": null`).
    pub fn ok() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            msg: MSG_SUCCESS.to_string(),
            body: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_success_serializes_null_body() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({ "status": 200, "msg": "success", "body": null }));
    }

    #[test]
    fn error_has_no_body() {
        let resp = ApiResponse::<()>::error(StatusCode::BAD_REQUEST, "duplicate username");
        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(
            value,
            json!({ "status": 400, "msg": "duplicate username", "body": null })
        );
    }

    #[test]
    fn http_status_follows_envelope_status() {
        let resp = ApiResponse::<()>::error(StatusCode::UNAUTHORIZED, "nope").into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ApiResponse::success(json!({ "id": 1 })).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
