//! 全局错误类型定义
//! 对外接口的错误码为固定闭集，校验类错误一律在网络请求前同步返回

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum ScanError {
    // 请求校验错误（发起抓取前同步检出）
    #[error("缺少url参数")]
    MissingUrl,
    #[error("无效URL：{0}")]
    InvalidUrl(String),
    #[error("目标URL被拦截（私有/回环地址）：{0}")]
    BlockedUrl(String),

    // 抓取相关错误
    #[error("目标站点返回非成功状态：{status}")]
    FetchError { status: u16 },
    #[error("网络请求失败：{0}")]
    NetworkError(String),
    #[error("抓取超时")]
    Timeout,

    // 规则编译错误（启动期）
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 基础错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),

    // 兜底错误
    #[error("未预期的内部错误：{0}")]
    Unexpected(String),
}

impl ScanError {
    /// 对外错误码（闭集字符串，随响应体下发）
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::MissingUrl => "MISSING_URL",
            ScanError::InvalidUrl(_) | ScanError::UrlError(_) => "INVALID_URL",
            ScanError::BlockedUrl(_) => "BLOCKED_URL",
            ScanError::FetchError { .. } => "FETCH_ERROR",
            ScanError::NetworkError(_) => "NETWORK_ERROR",
            ScanError::Timeout => "TIMEOUT",
            _ => "UNEXPECTED_ERROR",
        }
    }

    /// 映射为HTTP状态码：校验/抓取类错误归为400，内部错误归为500
    pub fn http_status(&self) -> u16 {
        match self {
            ScanError::MissingUrl
            | ScanError::InvalidUrl(_)
            | ScanError::UrlError(_)
            | ScanError::BlockedUrl(_)
            | ScanError::FetchError { .. }
            | ScanError::NetworkError(_)
            | ScanError::Timeout => 400,
            _ => 500,
        }
    }

    /// 上游状态码（仅FETCH_ERROR携带）
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ScanError::FetchError { status } => Some(*status),
            _ => None,
        }
    }
}

// 全局Result类型
pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_closed_set() {
        assert_eq!(ScanError::MissingUrl.code(), "MISSING_URL");
        assert_eq!(ScanError::InvalidUrl("x".into()).code(), "INVALID_URL");
        assert_eq!(ScanError::BlockedUrl("127.0.0.1".into()).code(), "BLOCKED_URL");
        assert_eq!(ScanError::FetchError { status: 503 }.code(), "FETCH_ERROR");
        assert_eq!(ScanError::NetworkError("dns".into()).code(), "NETWORK_ERROR");
        assert_eq!(ScanError::Timeout.code(), "TIMEOUT");
        assert_eq!(ScanError::Unexpected("x".into()).code(), "UNEXPECTED_ERROR");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ScanError::MissingUrl.http_status(), 400);
        assert_eq!(ScanError::FetchError { status: 500 }.http_status(), 400);
        assert_eq!(ScanError::Unexpected("x".into()).http_status(), 500);
    }

    #[test]
    fn test_fetch_error_echoes_upstream_status() {
        assert_eq!(ScanError::FetchError { status: 418 }.upstream_status(), Some(418));
        assert_eq!(ScanError::Timeout.upstream_status(), None);
    }
}
