//! storescan - 网页技术栈指纹识别与电商站点体检评分引擎

// 导出全局错误类型
pub use self::error::{ScanError, ScanResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig};

// 导出规则模块核心接口
pub use self::rule::{Confidence, HeaderPattern, MetaPattern, Signature, signature_table};
pub use self::rule::platforms::{Platform, PlatformSignature, platform_table};

// 导出提取模块核心接口
pub use self::extractor::{HtmlExtractor, PageFeatures, extract_features};

// 导出编译模块核心接口
pub use self::compiler::{CompiledSignature, CompiledSignatureLibrary, SignatureCompiler};

// 导出检测模块核心接口（含兼容简化调用的自由函数）
pub use self::detector::{DetectedTechnology, TechDetector, detect_technologies, global_detector};

// 导出体检模块核心接口
pub use self::audit::{
    AuditSummary, AuditTest, CategoryKind, CategoryScore, CriticalIssue, StoreAuditResult,
    TestStatus, evaluate_store,
};
pub use self::audit::platform::detect_platform;

// 导出抓取模块核心接口
pub use self::fetcher::{FetchedPage, PageFetcher, normalize_url};

// 声明所有子模块
pub mod audit;
pub mod compiler;
pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod rule;
pub mod server;
