//! 电商体检模块
//! 对抓取到的页面执行测试电池，组装体检总结果

pub mod battery;
pub mod checks;
pub mod model;
pub mod platform;

use std::collections::HashMap;
use std::time::Instant;

pub use battery::{BatteryOutcome, run_all_tests};
pub use model::{
    AuditSummary, AuditTest, CategoryKind, CategoryScore, CriticalIssue, StoreAuditResult,
    TestStatus,
};

use crate::extractor::extract_features;

/// 执行完整体检并组装结果
///
/// 入参为已完成抓取的页面数据；体检本身是纯计算，绝不失败
pub fn evaluate_store(
    url: &str,
    final_url: &str,
    html: &str,
    headers: &HashMap<String, String>,
    fetch_time_ms: u64,
) -> StoreAuditResult {
    let analysis_start = Instant::now();

    let outcome = battery::run_all_tests(html, final_url, headers, fetch_time_ms);
    let global_score = battery::global_score(&outcome.categories);
    let summary = battery::summarize(&outcome.categories);
    let critical_issues = battery::select_critical_issues(&outcome.categories);
    let top_recommendations = battery::select_top_recommendations(&outcome.categories);
    let store_name = extract_store_name(html);

    StoreAuditResult {
        url: url.to_string(),
        final_url: final_url.to_string(),
        store_name,
        platform: outcome.platform,
        platform_confidence: outcome.platform_confidence,
        global_score,
        categories: outcome.categories,
        summary,
        critical_issues,
        top_recommendations,
        fetch_time: fetch_time_ms,
        analysis_time: analysis_start.elapsed().as_millis() as u64,
    }
}

/// 店铺名提取：优先og:site_name，其次<title>首段
fn extract_store_name(html: &str) -> Option<String> {
    let features = extract_features(html);

    if let Some(site_name) = features.meta_content("og:site_name") {
        let trimmed = site_name.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    features.title.as_deref().map(|title| {
        title
            .split(['|', '—', '–'])
            .next()
            .unwrap_or(title)
            .trim()
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_name_prefers_og_site_name() {
        let html = r#"
            <title>Inicio | Tienda Sol</title>
            <meta property="og:site_name" content="Tienda Sol">
        "#;
        assert_eq!(extract_store_name(html).as_deref(), Some("Tienda Sol"));
    }

    #[test]
    fn test_store_name_falls_back_to_title_head() {
        let html = "<title>Tienda Luna | Ropa urbana</title>";
        assert_eq!(extract_store_name(html).as_deref(), Some("Tienda Luna"));
    }

    #[test]
    fn test_store_name_absent_when_no_signals() {
        assert_eq!(extract_store_name("<p>hola</p>"), None);
    }

    #[test]
    fn test_evaluate_store_assembles_consistent_result() {
        let html = r#"
            <title>Tienda Demo</title>
            <meta name="description" content="La mejor tienda de zapatillas urbanas de la ciudad, con envíos a todo el país.">
            <script src="https://cdn.shopify.com/s/files/theme.js"></script>
            <script>Shopify.theme = {};</script>
            <p>Envío gratis en compras desde $50.000. Aceptamos visa y mercadopago.</p>
            <p>Agregar al carrito. Devoluciones sin cargo dentro de los 30 días.</p>
            <p>Contacto: <a href="mailto:hola@demo.com">hola@demo.com</a></p>
        "#;
        let result = evaluate_store(
            "https://tiendademo.com",
            "https://tiendademo.com/",
            html,
            &HashMap::new(),
            350,
        );

        assert_eq!(result.platform, crate::rule::platforms::Platform::Shopify);
        assert!(result.global_score <= 100);
        let expected_total: usize = result.categories.iter().map(|c| c.tests.len()).sum();
        assert_eq!(result.summary.total, expected_total);
        assert!(result.summary.passed + result.summary.failed + result.summary.warnings <= result.summary.total);
        assert!(result.critical_issues.len() <= 5);
        assert!(result.top_recommendations.len() <= 5);
        assert_eq!(result.store_name.as_deref(), Some("Tienda Demo"));
        assert_eq!(result.fetch_time, 350);
    }
}
