//! 规则编译模块：将声明式签名表编译为可执行正则

mod compiler;
mod pattern;

pub use compiler::SignatureCompiler;
pub use pattern::{
    CompiledHeaderPattern, CompiledMetaPattern, CompiledSignature, CompiledSignatureLibrary,
};
