use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    InvalidBody(String),
    InvalidCoordinate(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {detail}"),
            ),
            ApiError::InvalidCoordinate(detail) => {
                (StatusCode::BAD_REQUEST, format!("Invalid coordinate: {detail}"))
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message,
        });

        (status, body).into_response()
    }
}

// Json 提取失败（非法 JSON、缺字段、类型不符）统一转成结构化 4xx
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
