//! URL归一化、校验与私网拦截
//! 全部校验在发起任何网络请求之前同步完成

use url::Url;

use crate::error::{ScanError, ScanResult};

/// 归一化并校验目标URL
/// 1. 空输入 => MISSING_URL
/// 2. 无scheme时自动补https://
/// 3. 非法URL或非http/https scheme => INVALID_URL
/// 4. 私网/回环主机 => BLOCKED_URL
pub fn normalize_url(raw: &str) -> ScanResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::MissingUrl);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|_| ScanError::InvalidUrl(trimmed.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ScanError::InvalidUrl(format!("{trimmed}（scheme：{other}）")));
        }
    }

    let host = url
        .host_str()
        .ok_or_else(|| ScanError::InvalidUrl(trimmed.to_string()))?;

    if !is_allowed_host(host) {
        return Err(ScanError::BlockedUrl(host.to_string()));
    }

    Ok(url)
}

/// 主机拦截判定（契约固定的模式清单，按前缀/后缀字面匹配）
/// 172.16.*刻意窄于RFC1918的172.16/12段，保持与对外文档一致
fn is_allowed_host(host: &str) -> bool {
    let host = host.to_lowercase();

    if host == "localhost" || host == "127.0.0.1" {
        return false;
    }
    if host.starts_with("192.168.") || host.starts_with("10.") || host.starts_with("172.16.") {
        return false;
    }
    if host.ends_with(".local") {
        return false;
    }

    true
}

/// 对已解析URL的拦截判定
pub fn is_allowed_url(url: &Url) -> bool {
    url.host_str().map(is_allowed_host).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_is_prepended() {
        let url = normalize_url("tienda.com/productos").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("tienda.com"));
    }

    #[test]
    fn test_empty_is_missing_url() {
        assert!(matches!(normalize_url("  "), Err(ScanError::MissingUrl)));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(matches!(
            normalize_url("ftp://tienda.com"),
            Err(ScanError::InvalidUrl(_))
        ));
        assert!(matches!(
            normalize_url("javascript:alert(1)"),
            Err(ScanError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(matches!(
            normalize_url("http://"),
            Err(ScanError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_blocked_hosts_exact_list() {
        for blocked in [
            "http://localhost",
            "http://127.0.0.1",
            "http://192.168.1.5",
            "http://10.0.0.8",
            "http://172.16.4.1",
            "http://impresora.local",
        ] {
            assert!(
                matches!(normalize_url(blocked), Err(ScanError::BlockedUrl(_))),
                "{blocked}应被拦截"
            );
        }
    }

    #[test]
    fn test_non_private_hosts_allowed() {
        for allowed in [
            "https://tienda.com",
            "https://sub.dominio.com.ar",
            // 172.17属RFC1918但不在契约清单内，按文档放行
            "http://172.17.0.1",
            "https://localhost.com",
        ] {
            assert!(normalize_url(allowed).is_ok(), "{allowed}应放行");
        }
    }

    #[test]
    fn test_blocking_happens_before_any_fetch() {
        // normalize_url为纯同步函数，返回错误即说明未发起网络请求
        let result = normalize_url("http://192.168.1.5");
        assert!(matches!(result, Err(ScanError::BlockedUrl(_))));
    }
}
