//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑；规则表为进程级只读数据，启动后不再变更

use std::fmt;

use serde::{Deserialize, Serialize};

/// 检测置信度
/// 排序按强度升序编号：high=0、medium=1、low=2，输出列表按该序号排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// 排序序号（high在前）
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::High => 0,
            Confidence::Medium => 1,
            Confidence::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// meta标签匹配模式：按name/property等值匹配，可选content正则细化
#[derive(Debug, Clone)]
pub struct MetaPattern {
    pub name: &'static str,
    pub content: Option<&'static str>,
}

/// Header匹配模式：按Header名存在性匹配，可选值正则细化
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    pub name: &'static str,
    pub value: Option<&'static str>,
}

/// 单个技术签名的全部模式组
/// 零模式的签名永远无法命中（编译期会告警）
#[derive(Debug, Clone, Default)]
pub struct PatternGroups {
    pub html: Vec<&'static str>,
    pub script_src: Vec<&'static str>,
    pub stylesheet: Vec<&'static str>,
    pub meta: Vec<MetaPattern>,
    pub headers: Vec<HeaderPattern>,
    pub generator: Vec<&'static str>,
}

impl PatternGroups {
    /// 声明的模式总数
    pub fn total(&self) -> usize {
        self.html.len()
            + self.script_src.len()
            + self.stylesheet.len()
            + self.meta.len()
            + self.headers.len()
            + self.generator.len()
    }
}

/// 技术签名（声明式规则）
#[derive(Debug, Clone)]
pub struct Signature {
    pub name: &'static str,
    pub category: &'static str,
    pub website: Option<&'static str>,
    pub description: Option<&'static str>,
    pub patterns: PatternGroups,
}

impl Signature {
    pub fn new(name: &'static str, category: &'static str) -> Self {
        Self {
            name,
            category,
            website: None,
            description: None,
            patterns: PatternGroups::default(),
        }
    }

    pub fn website(mut self, website: &'static str) -> Self {
        self.website = Some(website);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn html(mut self, patterns: &[&'static str]) -> Self {
        self.patterns.html.extend_from_slice(patterns);
        self
    }

    pub fn script_src(mut self, patterns: &[&'static str]) -> Self {
        self.patterns.script_src.extend_from_slice(patterns);
        self
    }

    pub fn stylesheet(mut self, patterns: &[&'static str]) -> Self {
        self.patterns.stylesheet.extend_from_slice(patterns);
        self
    }

    pub fn meta(mut self, name: &'static str, content: Option<&'static str>) -> Self {
        self.patterns.meta.push(MetaPattern { name, content });
        self
    }

    pub fn header(mut self, name: &'static str, value: Option<&'static str>) -> Self {
        self.patterns.headers.push(HeaderPattern { name, value });
        self
    }

    pub fn generator(mut self, patterns: &[&'static str]) -> Self {
        self.patterns.generator.extend_from_slice(patterns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_rank_order() {
        assert!(Confidence::High.rank() < Confidence::Medium.rank());
        assert!(Confidence::Medium.rank() < Confidence::Low.rank());
    }

    #[test]
    fn test_pattern_groups_total() {
        let sig = Signature::new("X", "CMS")
            .html(&["a", "b"])
            .meta("generator", None)
            .header("server", Some("nginx"));
        assert_eq!(sig.patterns.total(), 4);
    }
}
