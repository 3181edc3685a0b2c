//! 体检执行器
//! 固定顺序跑完十个分类的测试组，做两级加权汇总：
//! 分类内按测试权重加权平均；全局按分类权重表加权平均。两套权重互不混用。

use std::collections::HashMap;

use tracing::debug;

use super::checks::{self, CheckContext};
use super::model::{AuditSummary, AuditTest, CategoryKind, CategoryScore, CriticalIssue, TestStatus};
use super::platform::detect_platform;
use crate::extractor::extract_features;
use crate::rule::Confidence;
use crate::rule::platforms::Platform;

/// 关键问题最多返回条数
const CRITICAL_ISSUE_CAP: usize = 5;
/// 改进建议最多返回条数
const TOP_RECOMMENDATION_CAP: usize = 5;
/// 关键问题的测试权重门槛
const CRITICAL_WEIGHT_THRESHOLD: f64 = 2.0;

/// 测试执行结果（含平台判定）
#[derive(Debug, Clone)]
pub struct BatteryOutcome {
    pub categories: Vec<CategoryScore>,
    pub platform: Platform,
    pub platform_confidence: Confidence,
}

/// 执行全部测试分类
/// 永不失败：信号缺失由各测试自行退化为fail/info，空输入也有确定结果
pub fn run_all_tests(
    html: &str,
    final_url: &str,
    headers: &HashMap<String, String>,
    response_time_ms: u64,
) -> BatteryOutcome {
    let features = extract_features(html);
    let ctx = CheckContext::new(html, &features, headers, final_url, response_time_ms);

    let mut categories = Vec::with_capacity(CategoryKind::ALL.len());
    for kind in CategoryKind::ALL {
        let tests = checks::run_category(kind, &ctx);
        // 空分类整体跳过，避免零权重除法
        if tests.is_empty() {
            continue;
        }
        let score = category_score(&tests);
        debug!("分类{}得分：{}（{}项测试）", kind.display_name(), score, tests.len());

        categories.push(CategoryScore {
            category: kind,
            name: kind.display_name(),
            description: kind.description(),
            score,
            tests,
            icon: kind.icon(),
        });
    }

    let (platform, platform_confidence) = detect_platform(html, headers);

    BatteryOutcome {
        categories,
        platform,
        platform_confidence,
    }
}

/// 分类得分：测试权重加权平均，四舍五入并钳制到[0,100]
pub fn category_score(tests: &[AuditTest]) -> u8 {
    let weight_sum: f64 = tests.iter().map(|t| t.weight).sum();
    if weight_sum <= 0.0 {
        return 0;
    }
    let weighted: f64 = tests.iter().map(|t| f64::from(t.score) * t.weight).sum();
    (weighted / weight_sum).round().clamp(0.0, 100.0) as u8
}

/// 全局得分：分类权重表加权平均（与测试权重无关）
pub fn global_score(categories: &[CategoryScore]) -> u8 {
    let weight_sum: f64 = categories.iter().map(|c| c.category.global_weight()).sum();
    if weight_sum <= 0.0 {
        return 0;
    }
    let weighted: f64 = categories
        .iter()
        .map(|c| f64::from(c.score) * c.category.global_weight())
        .sum();
    (weighted / weight_sum).round().clamp(0.0, 100.0) as u8
}

/// 关键问题：fail且权重>=2，按分类/测试声明顺序取前5条（不按严重度重排）
pub fn select_critical_issues(categories: &[CategoryScore]) -> Vec<CriticalIssue> {
    let mut issues = Vec::new();
    'outer: for category in categories {
        for test in &category.tests {
            if test.status == TestStatus::Fail && test.weight >= CRITICAL_WEIGHT_THRESHOLD {
                issues.push(CriticalIssue {
                    category: category.category,
                    id: test.id,
                    name: test.name,
                    recommendation: test.recommendation.clone(),
                });
                if issues.len() == CRITICAL_ISSUE_CAP {
                    break 'outer;
                }
            }
        }
    }
    issues
}

/// 改进建议：所有带建议文案的fail测试，按权重降序取前5条文案（跨分类不去重）
pub fn select_top_recommendations(categories: &[CategoryScore]) -> Vec<String> {
    let mut failing: Vec<(f64, &str)> = categories
        .iter()
        .flat_map(|c| c.tests.iter())
        .filter(|t| t.status == TestStatus::Fail)
        .filter_map(|t| t.recommendation.as_deref().map(|r| (t.weight, r)))
        .filter(|(_, r)| !r.is_empty())
        .collect();

    // 稳定排序：同权重保持声明顺序
    failing.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    failing
        .into_iter()
        .take(TOP_RECOMMENDATION_CAP)
        .map(|(_, r)| r.to_string())
        .collect()
}

/// 汇总计数：info不计入三态，total等于全部测试项数
pub fn summarize(categories: &[CategoryScore]) -> AuditSummary {
    let mut summary = AuditSummary::default();
    for category in categories {
        for test in &category.tests {
            summary.total += 1;
            match test.status {
                TestStatus::Pass => summary.passed += 1,
                TestStatus::Fail => summary.failed += 1,
                TestStatus::Warning => summary.warnings += 1,
                TestStatus::Info => {}
            }
        }
    }
    summary
}
