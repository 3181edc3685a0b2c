//! 规则编译器核心
//! 仅负责将声明式签名表编译为可执行的正则模式
//! 规则为第一方字符串字面量，编译失败视为启动期缺陷直接报错，不做自动修复

use std::time::Instant;

use tracing::debug;

use super::pattern::{
    CompiledHeaderPattern, CompiledMetaPattern, CompiledSignature, CompiledSignatureLibrary,
};
use crate::error::ScanResult;
use crate::rule::{HeaderPattern, MetaPattern, Signature};

/// 签名编译器
pub struct SignatureCompiler;

impl SignatureCompiler {
    /// 编译签名表
    pub fn compile(signatures: &[Signature]) -> ScanResult<CompiledSignatureLibrary> {
        let start = Instant::now();
        let mut compiled = Vec::with_capacity(signatures.len());
        let mut stats = CompileStats::default();

        for signature in signatures {
            compiled.push(Self::compile_signature(signature, &mut stats)?);
        }

        debug!(
            "签名编译完成：{}条签名，耗时{:?}；HTML模式{}条、Script模式{}条、样式表模式{}条、Meta模式{}条、Header模式{}条、Generator模式{}条",
            compiled.len(),
            start.elapsed(),
            stats.html_count,
            stats.script_count,
            stats.stylesheet_count,
            stats.meta_count,
            stats.header_count,
            stats.generator_count,
        );

        Ok(CompiledSignatureLibrary { signatures: compiled })
    }

    /// 编译单个签名
    fn compile_signature(
        signature: &Signature,
        stats: &mut CompileStats,
    ) -> ScanResult<CompiledSignature> {
        let html = Self::compile_list(&signature.patterns.html)?;
        let script_src = Self::compile_list(&signature.patterns.script_src)?;
        let stylesheet = Self::compile_list(&signature.patterns.stylesheet)?;
        let meta = Self::compile_meta(&signature.patterns.meta)?;
        let headers = Self::compile_headers(&signature.patterns.headers)?;
        let generator = Self::compile_list(&signature.patterns.generator)?;

        stats.html_count += html.len();
        stats.script_count += script_src.len();
        stats.stylesheet_count += stylesheet.len();
        stats.meta_count += meta.len();
        stats.header_count += headers.len();
        stats.generator_count += generator.len();

        let total_patterns = signature.patterns.total();

        Ok(CompiledSignature {
            name: signature.name,
            category: signature.category,
            website: signature.website,
            description: signature.description,
            html,
            script_src,
            stylesheet,
            meta,
            headers,
            generator,
            total_patterns,
        })
    }

    /// 编译列表型模式（html/script/stylesheet/generator）
    fn compile_list(patterns: &[&str]) -> ScanResult<Vec<regex::Regex>> {
        patterns
            .iter()
            .map(|p| regex::Regex::new(p).map_err(Into::into))
            .collect()
    }

    /// 编译meta模式（键预先小写，content正则可选）
    fn compile_meta(patterns: &[MetaPattern]) -> ScanResult<Vec<CompiledMetaPattern>> {
        patterns
            .iter()
            .map(|p| {
                Ok(CompiledMetaPattern {
                    name: p.name.to_lowercase(),
                    content: p.content.map(regex::Regex::new).transpose()?,
                })
            })
            .collect()
    }

    /// 编译Header模式（键预先小写，值正则可选）
    fn compile_headers(patterns: &[HeaderPattern]) -> ScanResult<Vec<CompiledHeaderPattern>> {
        patterns
            .iter()
            .map(|p| {
                Ok(CompiledHeaderPattern {
                    name: p.name.to_lowercase(),
                    value: p.value.map(regex::Regex::new).transpose()?,
                })
            })
            .collect()
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    html_count: usize,
    script_count: usize,
    stylesheet_count: usize,
    meta_count: usize,
    header_count: usize,
    generator_count: usize,
}
