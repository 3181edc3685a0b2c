//! HTTP服务层
//! 暴露两个GET端点：/api/tech-detector 与 /api/store-audit
//! 服务本身无状态：每个请求独立完成 校验 -> 抓取 -> 评估 -> 序列化

mod handlers;

use axum::Router;
use axum::routing::get;
use tracing::info;

pub use handlers::{AppState, ErrorBody, TechDetectorResult};

use crate::config::GlobalConfig;
use crate::error::{ScanError, ScanResult};
use crate::fetcher::PageFetcher;

/// 构建路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/tech-detector", get(handlers::tech_detector_handler))
        .route("/api/store-audit", get(handlers::store_audit_handler))
        .with_state(state)
}

/// 启动HTTP服务（阻塞至服务退出）
pub async fn serve(config: GlobalConfig) -> ScanResult<()> {
    let fetcher = PageFetcher::new(&config)?;
    let state = AppState::new(fetcher);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| ScanError::Unexpected(format!("监听{}失败：{e}", config.bind_addr)))?;

    info!("storescan服务已启动：http://{}/", config.bind_addr);
    info!("  - 技术检测：http://{}/api/tech-detector?url=...", config.bind_addr);
    info!("  - 电商体检：http://{}/api/store-audit?url=...", config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ScanError::Unexpected(format!("服务运行异常：{e}")))?;

    Ok(())
}
