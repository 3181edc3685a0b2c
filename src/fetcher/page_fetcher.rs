//! 页面抓取器
//! 单次出站请求：带标识UA、跟随重定向、超时与响应体上限约束
//! 永不重试，失败直接映射为对应错误码

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use crate::config::GlobalConfig;
use crate::error::{ScanError, ScanResult};

/// 抓取完成的页面数据
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub requested_url: String,
    // 重定向后的最终URL
    pub final_url: String,
    pub status: u16,
    // 键已统一小写，同名Header取首个非空值
    pub headers: HashMap<String, String>,
    pub body: String,
    pub fetch_time_ms: u64,
}

/// 页面抓取器
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl PageFetcher {
    /// 按全局配置构建抓取器
    pub fn new(config: &GlobalConfig) -> ScanResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.http_timeout))
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| ScanError::Unexpected(format!("HTTP客户端构建失败：{e}")))?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// 抓取目标页面（URL须已通过url_guard校验）
    pub async fn fetch(&self, url: &Url) -> ScanResult<FetchedPage> {
        let start = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::FetchError {
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let headers = headers_to_map(response.headers());
        let body = Self::read_body_capped(response, self.max_body_bytes).await?;
        let fetch_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "抓取完成：{}（{}字节，{}ms）",
            final_url,
            body.len(),
            fetch_time_ms
        );

        Ok(FetchedPage {
            requested_url: url.to_string(),
            final_url,
            status: status.as_u16(),
            headers,
            body,
            fetch_time_ms,
        })
    }

    /// 分块读取响应体，超过上限即截断（超大页面不应拖垮单次请求的内存）
    async fn read_body_capped(
        mut response: reqwest::Response,
        max_bytes: usize,
    ) -> ScanResult<String> {
        let mut buf: Vec<u8> = Vec::new();

        while let Some(chunk) = response.chunk().await.map_err(classify_transport_error)? {
            let remaining = max_bytes.saturating_sub(buf.len());
            if remaining == 0 {
                debug!("响应体达到{}字节上限，截断读取", max_bytes);
                break;
            }
            let take = remaining.min(chunk.len());
            buf.extend_from_slice(&chunk[..take]);
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// 传输层错误分类：超时单列，其余归为网络错误
fn classify_transport_error(e: reqwest::Error) -> ScanError {
    if e.is_timeout() {
        ScanError::Timeout
    } else {
        ScanError::NetworkError(e.to_string())
    }
}

/// HeaderMap转小写键单值映射（同名取首个非空值）
pub fn headers_to_map(header_map: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for (key, value) in header_map.iter() {
        let key_str = key.as_str().to_lowercase();
        let value_str = value.to_str().unwrap_or("");
        match map.get_mut(&key_str) {
            Some(existing) => {
                if existing.is_empty() && !value_str.is_empty() {
                    *existing = value_str.to_string();
                }
            }
            None => {
                map.insert(key_str, value_str.to_string());
            }
        }
    }
    map
}
