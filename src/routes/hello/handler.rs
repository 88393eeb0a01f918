use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// 欢迎响应
#[derive(Serialize)]
pub struct HelloResponse {
    /// 提示文案
    pub message: String,
}

/// 欢迎接口
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HelloResponse {
            message: "Click anywhere on the globe to get started!".to_string(),
        }),
    )
}
