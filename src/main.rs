use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use globe_backend::{AppState, cache::LocationCache, config::Config, router::create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env();
    tracing::info!("Active payload variant: {:?}", config.payload_variant);

    // 设置应用状态，缓存随进程生命周期存在
    let state = AppState {
        cache: Arc::new(LocationCache::new(config.payload_variant)),
        config: config.clone(),
    };

    let app = create_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
