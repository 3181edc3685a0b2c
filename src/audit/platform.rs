//! 电商平台判定
//! 对HTML与字符串化Header的合并语料做去重计数：
//! 首个累计>=2条独立模式命中的平台以high胜出；否则首个恰好1条者以medium胜出；
//! 全部落空时退化为通用电商特征判定（custom/low 或 unknown/low）

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::rule::Confidence;
use crate::rule::platforms::{Platform, generic_commerce_markers, platform_table};

/// 编译后的平台签名表（表序即判定顺序）
static COMPILED_PLATFORMS: Lazy<Vec<(Platform, Vec<Regex>)>> = Lazy::new(|| {
    platform_table()
        .iter()
        .map(|sig| {
            let regexes = sig
                .patterns
                .iter()
                .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("平台模式编译失败：{p} - {e}")))
                .collect();
            (sig.platform, regexes)
        })
        .collect()
});

static COMPILED_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    generic_commerce_markers()
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("电商特征模式编译失败：{p} - {e}")))
        .collect()
});

/// 判定页面所属电商平台
pub fn detect_platform(html: &str, headers: &HashMap<String, String>) -> (Platform, Confidence) {
    // 1. 合并判定语料（Header按行拼接，键已小写）
    let mut corpus = String::with_capacity(html.len() + headers.len() * 32);
    corpus.push_str(html);
    for (name, value) in headers {
        corpus.push('\n');
        corpus.push_str(name);
        corpus.push_str(": ");
        corpus.push_str(value);
    }

    // 2. 逐平台去重计数
    let counts: Vec<(Platform, usize)> = COMPILED_PLATFORMS
        .iter()
        .map(|(platform, regexes)| {
            let count = regexes.iter().filter(|r| r.is_match(&corpus)).count();
            (*platform, count)
        })
        .collect();

    // 3. 先到先得：>=2者high，其次==1者medium
    if let Some((platform, count)) = counts.iter().find(|(_, c)| *c >= 2) {
        debug!("平台判定：{}（{}条模式，high）", platform.as_str(), count);
        return (*platform, Confidence::High);
    }
    if let Some((platform, _)) = counts.iter().find(|(_, c)| *c == 1) {
        debug!("平台判定：{}（1条模式，medium）", platform.as_str());
        return (*platform, Confidence::Medium);
    }

    // 4. 兜底：通用电商特征
    if COMPILED_MARKERS.iter().any(|r| r.is_match(&corpus)) {
        (Platform::Custom, Confidence::Low)
    } else {
        (Platform::Unknown, Confidence::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_shopify_two_patterns_is_high() {
        let html = r#"
            <script src="https://cdn.shopify.com/s/files/1/theme.js"></script>
            <script>Shopify.theme = {"name":"Dawn"};</script>
        "#;
        let (platform, confidence) = detect_platform(html, &HashMap::new());
        assert_eq!(platform, Platform::Shopify);
        assert_eq!(confidence, Confidence::High);
    }

    #[test]
    fn test_single_pattern_is_medium() {
        let html = r#"<div class="wc-ajax-loader"></div>"#;
        let (platform, confidence) = detect_platform(html, &HashMap::new());
        assert_eq!(platform, Platform::Woocommerce);
        assert_eq!(confidence, Confidence::Medium);
    }

    #[test]
    fn test_headers_participate_in_detection() {
        let headers = headers_of(&[("x-shopify-stage", "production"), ("x-shopid", "1")]);
        let (platform, confidence) = detect_platform("", &headers);
        assert_eq!(platform, Platform::Shopify);
        // 仅x-shopify前缀一条模式命中，计1条
        assert_eq!(confidence, Confidence::Medium);
    }

    #[test]
    fn test_generic_commerce_fallback_is_custom_low() {
        let html = r#"<button>Agregar al carrito</button><span>Precio: $1500</span>"#;
        let (platform, confidence) = detect_platform(html, &HashMap::new());
        assert_eq!(platform, Platform::Custom);
        assert_eq!(confidence, Confidence::Low);
    }

    #[test]
    fn test_no_signals_is_unknown_low() {
        let (platform, confidence) = detect_platform("<p>blog personal</p>", &HashMap::new());
        assert_eq!(platform, Platform::Unknown);
        assert_eq!(confidence, Confidence::Low);
    }

    #[test]
    fn test_first_match_wins_on_tie() {
        // Shopify与WooCommerce同时各命中2条时，表序在前的Shopify胜出
        let html = r#"
            cdn.shopify.com Shopify.theme
            woocommerce wc-ajax
        "#;
        let (platform, _) = detect_platform(html, &HashMap::new());
        assert_eq!(platform, Platform::Shopify);
    }
}
