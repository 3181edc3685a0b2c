//! 检测器核心：对编译后签名库逐条评估，输出带置信度的技术列表
//!
//! 置信度策略（必须与对外契约严格一致）：
//! - 命中数/声明数 >= 0.5 或 命中数 >= 2 时为 high
//! - 否则命中数 >= 1 时为 medium
//! - 零命中的签名整体剔除，不输出零置信度条目

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compiler::{CompiledSignature, CompiledSignatureLibrary, SignatureCompiler};
use crate::error::ScanResult;
use crate::extractor::{PageFeatures, extract_features};
use crate::rule::{Confidence, signature_table};

/// 单项技术检测结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedTechnology {
    pub name: String,
    pub category: String,
    pub confidence: Confidence,
}

/// 技术检测器
#[derive(Debug, Clone)]
pub struct TechDetector {
    library: Arc<CompiledSignatureLibrary>,
}

impl TechDetector {
    /// 从内置签名表创建检测器
    pub fn new() -> ScanResult<Self> {
        let library = SignatureCompiler::compile(&signature_table())?;
        Ok(Self {
            library: Arc::new(library),
        })
    }

    /// 从外部编译库创建检测器
    pub fn with_library(library: Arc<CompiledSignatureLibrary>) -> Self {
        Self { library }
    }

    /// 核心检测接口（纯函数：相同输入恒定输出）
    ///
    /// `headers`键须已统一小写（抓取层负责归一化）
    pub fn detect(
        &self,
        html: &str,
        headers: &HashMap<String, String>,
    ) -> Vec<DetectedTechnology> {
        // 1. 提取页面特征
        let features = extract_features(html);
        self.detect_with_features(html, &features, headers)
    }

    /// 复用已提取特征的检测接口（体检链路与检测链路共享同一次提取）
    pub fn detect_with_features(
        &self,
        html: &str,
        features: &PageFeatures,
        headers: &HashMap<String, String>,
    ) -> Vec<DetectedTechnology> {
        let mut detected = Vec::new();

        // 2. 逐签名统计命中
        for signature in &self.library.signatures {
            let match_count = Self::count_matches(signature, html, features, headers);
            if match_count == 0 {
                continue;
            }

            let confidence = Self::confidence_for(match_count, signature.total_patterns);
            debug!(
                "签名命中：{}（{}/{}，{}）",
                signature.name, match_count, signature.total_patterns, confidence
            );

            detected.push(DetectedTechnology {
                name: signature.name.to_string(),
                category: signature.category.to_string(),
                confidence,
            });
        }

        // 3. 输出排序：置信度强者在前，同级按名称字典序
        detected.sort_by(|a, b| {
            a.confidence
                .rank()
                .cmp(&b.confidence.rank())
                .then_with(|| a.name.cmp(&b.name))
        });

        detected
    }

    /// 统计单个签名的命中模式数
    /// 列表型模式对多个候选URL只计一次（首个命中即停止该模式的扫描）
    fn count_matches(
        signature: &CompiledSignature,
        html: &str,
        features: &PageFeatures,
        headers: &HashMap<String, String>,
    ) -> usize {
        let mut count = 0;

        // HTML全文模式
        for regex in &signature.html {
            if regex.is_match(html) {
                count += 1;
            }
        }

        // script-src模式：任一URL命中即计数
        for regex in &signature.script_src {
            if features.script_srcs.iter().any(|src| regex.is_match(src)) {
                count += 1;
            }
        }

        // 样式表href模式
        for regex in &signature.stylesheet {
            if features.stylesheet_hrefs.iter().any(|href| regex.is_match(href)) {
                count += 1;
            }
        }

        // meta模式：名称等值命中即计数，有content正则时须进一步命中内容
        for pattern in &signature.meta {
            let hit = features.meta_tags.iter().any(|(name, content)| {
                if *name != pattern.name {
                    return false;
                }
                match &pattern.content {
                    Some(regex) => regex.is_match(content),
                    None => true,
                }
            });
            if hit {
                count += 1;
            }
        }

        // Header模式：名称存在即计数，有值正则时须进一步命中值
        for pattern in &signature.headers {
            let hit = match headers.get(&pattern.name) {
                Some(value) => match &pattern.value {
                    Some(regex) => regex.is_match(value),
                    None => true,
                },
                None => false,
            };
            if hit {
                count += 1;
            }
        }

        // generator模式：仅在提取到generator标记时评估
        if let Some(generator) = &features.generator {
            for regex in &signature.generator {
                if regex.is_match(generator) {
                    count += 1;
                }
            }
        }

        count
    }

    /// 置信度阈值函数
    /// low分支在当前调用路径下不可达（零命中已在上游剔除），保留以固定表意
    fn confidence_for(match_count: usize, total_patterns: usize) -> Confidence {
        let ratio = if total_patterns > 0 {
            match_count as f64 / total_patterns as f64
        } else {
            0.0
        };

        if ratio >= 0.5 || match_count >= 2 {
            Confidence::High
        } else if match_count >= 1 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// 简化调用入口：使用全局检测器
pub fn detect_technologies(
    html: &str,
    headers: &HashMap<String, String>,
) -> Vec<DetectedTechnology> {
    super::global::global_detector().detect(html, headers)
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
    fn test_wordpress_detected_high_from_style_path_and_generator() {
        let html = r#"
            <link href="/wp-content/themes/x/style.css" rel="stylesheet">
            <meta name="generator" content="WordPress 6.4">
        "#;
        let detected = detect_technologies(html, &HashMap::new());

        let wp = detected
            .iter()
            .find(|t| t.name == "WordPress")
            .expect("应检出WordPress");
        assert!(matches!(wp.confidence, Confidence::High));
    }

    #[test]
    fn test_single_hit_is_medium() {
        // Drupal声明4条模式，仅命中header一条 => 1/4 < 0.5 且 < 2
        let headers = headers_of(&[("x-drupal-cache", "HIT")]);
        let detected = detect_technologies("", &headers);

        let drupal = detected.iter().find(|t| t.name == "Drupal").unwrap();
        assert!(matches!(drupal.confidence, Confidence::Medium));
    }

    #[test]
    fn test_ratio_half_is_high() {
        // jQuery仅1条模式，1/1 >= 0.5 => high
        let html = r#"<script src="/assets/jquery-3.7.1.min.js"></script>"#;
        let detected = detect_technologies(html, &HashMap::new());

        let jq = detected.iter().find(|t| t.name == "jQuery").unwrap();
        assert!(matches!(jq.confidence, Confidence::High));
    }

    #[test]
    fn test_empty_input_detects_nothing() {
        assert!(detect_technologies("", &HashMap::new()).is_empty());
    }

    #[test]
    fn test_detection_is_deterministic() {
        let html = r#"
            <script src="https://cdn.shopify.com/s/files/theme.js"></script>
            <script>var Shopify = Shopify || {}; Shopify.theme = {};</script>
            <script src="/assets/jquery.min.js"></script>
        "#;
        let headers = headers_of(&[("server", "cloudflare"), ("cf-ray", "abc")]);

        let first = detect_technologies(html, &headers);
        let second = detect_technologies(html, &headers);
        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_output_sorted_confidence_then_name() {
        let html = r#"
            <script src="https://cdn.shopify.com/s/files/theme.js"></script>
            <script>Shopify.theme = {};</script>
            <meta name="generator" content="WordPress 6.4">
        "#;
        let detected = detect_technologies(html, &HashMap::new());
        assert!(detected.len() >= 2);

        for pair in detected.windows(2) {
            let ordered = pair[0].confidence.rank() < pair[1].confidence.rank()
                || (pair[0].confidence.rank() == pair[1].confidence.rank()
                    && pair[0].name <= pair[1].name);
            assert!(ordered, "输出顺序异常：{:?}", detected);
        }
    }

    #[test]
    fn test_confidence_monotonic_in_match_count() {
        // 同分母下命中数更多者置信度不弱
        for total in 1..=6usize {
            let mut prev_rank = u8::MAX;
            for count in 1..=total {
                let rank = TechDetector::confidence_for(count, total).rank();
                assert!(rank <= prev_rank);
                prev_rank = rank;
            }
        }
    }

    #[test]
    fn test_low_branch_pinned() {
        // 零命中在detect中已被剔除；此分支仅为表意保留
        assert!(matches!(
            TechDetector::confidence_for(0, 4),
            Confidence::Low
        ));
    }

    #[test]
    fn test_meta_content_regex_refinement() {
        // generator内容不匹配content正则时不计数
        let html = r#"<meta name="generator" content="Hugo 0.120">"#;
        let detected = detect_technologies(html, &HashMap::new());
        assert!(detected.iter().all(|t| t.name != "WordPress"));
    }
}
