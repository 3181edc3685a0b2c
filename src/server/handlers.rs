//! 端点处理器
//! 查询参数解析、评估器调用与错误码映射

use std::collections::HashMap;
use std::time::Instant;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::audit::StoreAuditResult;
use crate::detector::{DetectedTechnology, global_detector};
use crate::error::ScanError;
use crate::fetcher::{FetchedPage, PageFetcher, normalize_url};

/// 共享应用状态（仅持有抓取器，无跨请求可变状态）
#[derive(Clone)]
pub struct AppState {
    fetcher: PageFetcher,
}

impl AppState {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

/// 查询参数
#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    url: Option<String>,
}

/// 技术检测结果响应体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechDetectorResult {
    pub url: String,
    pub final_url: String,
    pub technologies: Vec<DetectedTechnology>,
    // 响应Header回显（键统一小写）
    pub headers: HashMap<String, String>,
    pub fetch_time: u64,
    pub analysis_time: u64,
}

/// 错误响应体（闭集错误码）
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// 错误到HTTP响应的统一映射
pub struct ApiError(ScanError);

impl From<ScanError> for ApiError {
    fn from(e: ScanError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = StatusCode::from_u16(error.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!("请求处理异常：{error}");
        }

        let body = ErrorBody {
            error: true,
            code: error.code(),
            message: error.to_string(),
            status: error.upstream_status(),
        };
        (status, Json(body)).into_response()
    }
}

/// 共享前置流程：参数校验 -> URL归一化 -> 抓取
async fn validated_fetch(fetcher: &PageFetcher, query: &UrlQuery) -> Result<FetchedPage, ApiError> {
    let raw = query.url.as_deref().ok_or(ScanError::MissingUrl)?;
    let url = normalize_url(raw)?;
    debug!("开始抓取：{url}");
    Ok(fetcher.fetch(&url).await?)
}

/// GET /api/tech-detector?url=...
pub async fn tech_detector_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<TechDetectorResult>, ApiError> {
    let page = validated_fetch(&state.fetcher, &query).await?;

    let analysis_start = Instant::now();
    let technologies = global_detector().detect(&page.body, &page.headers);
    let analysis_time = analysis_start.elapsed().as_millis() as u64;

    Ok(Json(TechDetectorResult {
        url: page.requested_url,
        final_url: page.final_url,
        technologies,
        headers: page.headers,
        fetch_time: page.fetch_time_ms,
        analysis_time,
    }))
}

/// GET /api/store-audit?url=...
pub async fn store_audit_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<StoreAuditResult>, ApiError> {
    let page = validated_fetch(&state.fetcher, &query).await?;

    let result = crate::audit::evaluate_store(
        &page.requested_url,
        &page.final_url,
        &page.body,
        &page.headers,
        page.fetch_time_ms,
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape_for_missing_url() {
        let body = ErrorBody {
            error: true,
            code: ScanError::MissingUrl.code(),
            message: ScanError::MissingUrl.to_string(),
            status: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["code"], "MISSING_URL");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_fetch_error_body_carries_upstream_status() {
        let error = ScanError::FetchError { status: 503 };
        let body = ErrorBody {
            error: true,
            code: error.code(),
            message: error.to_string(),
            status: error.upstream_status(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "FETCH_ERROR");
        assert_eq!(json["status"], 503);
    }
}
