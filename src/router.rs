use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{AppState, routes};

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/hello", get(routes::hello::hello))
        .route("/location", post(routes::location::create_location))
        .route("/location/{lat}/{lng}", get(routes::location::get_location));

    // 允许任意来源的跨域请求
    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
