//! 分类测试模块
//! 每个分类一个子模块，`run`返回固定顺序的测试项列表
//! 所有测试均为纯判定：信号缺失时给出fail/info等确定结果，绝不panic

pub mod checkout;
pub mod descriptions;
pub mod performance;
pub mod products;
pub mod search;
pub mod seo;
pub mod shipping;
pub mod trust;
pub mod upselling;
pub mod urgency;

use std::collections::HashMap;

use crate::audit::model::{AuditTest, CategoryKind};
use crate::extractor::PageFeatures;

/// 单次体检的共享判定上下文
pub struct CheckContext<'a> {
    pub html: &'a str,
    // 预先小写的副本，供大小写无关的子串判定复用
    pub html_lower: String,
    pub features: &'a PageFeatures,
    pub headers: &'a HashMap<String, String>,
    pub final_url: &'a str,
    pub response_time_ms: u64,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        html: &'a str,
        features: &'a PageFeatures,
        headers: &'a HashMap<String, String>,
        final_url: &'a str,
        response_time_ms: u64,
    ) -> Self {
        Self {
            html,
            html_lower: html.to_lowercase(),
            features,
            headers,
            final_url,
            response_time_ms,
        }
    }

    /// 任一标记出现即命中（标记须为小写）
    pub fn contains_any(&self, markers: &[&str]) -> bool {
        markers.iter().any(|m| self.html_lower.contains(m))
    }
}

/// 按分类分派测试列表（分类内测试顺序固定）
pub fn run_category(category: CategoryKind, ctx: &CheckContext) -> Vec<AuditTest> {
    match category {
        CategoryKind::Trust => trust::run(ctx),
        CategoryKind::Checkout => checkout::run(ctx),
        CategoryKind::Shipping => shipping::run(ctx),
        CategoryKind::Performance => performance::run(ctx),
        CategoryKind::Products => products::run(ctx),
        CategoryKind::Descriptions => descriptions::run(ctx),
        CategoryKind::Search => search::run(ctx),
        CategoryKind::Urgency => urgency::run(ctx),
        CategoryKind::Upselling => upselling::run(ctx),
        CategoryKind::Seo => seo::run(ctx),
    }
}
