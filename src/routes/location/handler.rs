use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use tracing::info;

use crate::{AppState, cache::location_key, error::ApiError};

use super::model::LocationRequest;

#[axum::debug_handler]
pub async fn create_location(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LocationRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    if !req.lat.is_finite() || !req.lng.is_finite() {
        return Err(ApiError::InvalidCoordinate(
            "lat and lng must be finite numbers".to_string(),
        ));
    }

    let key = location_key(req.lat, req.lng);
    let record = state.cache.get_or_create(&key, req.lat, req.lng);
    info!("Location {} now has {} cached entries total", key, state.cache.len());

    Ok((StatusCode::OK, Json(record)))
}

#[axum::debug_handler]
pub async fn get_location(
    State(state): State<AppState>,
    Path((lat, lng)): Path<(f64, f64)>,
) -> impl IntoResponse {
    let key = location_key(lat, lng);

    // 只读路径：未命中返回变体对应的空载荷，不创建条目
    let record = state
        .cache
        .lookup(&key)
        .unwrap_or_else(|| state.cache.empty_record(lat, lng));

    (StatusCode::OK, Json(record))
}
