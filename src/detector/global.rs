//! 全局检测器单例管理
//! 内置签名表为第一方常量，编译失败属启动期程序缺陷，直接中止

use once_cell::sync::Lazy;

use super::detector::TechDetector;

/// 全局检测器实例（首次访问时编译签名表，之后只读共享）
static GLOBAL_DETECTOR: Lazy<TechDetector> = Lazy::new(|| {
    TechDetector::new().unwrap_or_else(|e| {
        panic!("内置签名表编译失败：{e}");
    })
});

/// 获取全局检测器
pub fn global_detector() -> &'static TechDetector {
    &GLOBAL_DETECTOR
}
