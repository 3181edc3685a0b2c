//! 编译后模式模型
//! 正则编译后的结构，请求处理期间只读共享

use regex::Regex;

/// 编译后的meta模式：名称等值匹配 + 可选content正则
#[derive(Debug, Clone)]
pub struct CompiledMetaPattern {
    pub name: String,
    pub content: Option<Regex>,
}

/// 编译后的Header模式：名称存在性匹配 + 可选值正则
#[derive(Debug, Clone)]
pub struct CompiledHeaderPattern {
    pub name: String,
    pub value: Option<Regex>,
}

/// 技术签名编译后的规则
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub name: &'static str,
    pub category: &'static str,
    pub website: Option<&'static str>,
    pub description: Option<&'static str>,
    pub html: Vec<Regex>,
    pub script_src: Vec<Regex>,
    pub stylesheet: Vec<Regex>,
    pub meta: Vec<CompiledMetaPattern>,
    pub headers: Vec<CompiledHeaderPattern>,
    pub generator: Vec<Regex>,
    // 声明模式总数（置信度分母）
    pub total_patterns: usize,
}

/// 编译后的签名库
#[derive(Debug, Clone, Default)]
pub struct CompiledSignatureLibrary {
    pub signatures: Vec<CompiledSignature>,
}

impl CompiledSignatureLibrary {
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
