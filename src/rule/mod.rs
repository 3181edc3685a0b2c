//! 规则模块：签名数据模型与静态规则表

pub mod model;
pub mod platforms;
pub mod signatures;

pub use model::{Confidence, HeaderPattern, MetaPattern, PatternGroups, Signature};
pub use signatures::signature_table;
