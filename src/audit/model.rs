//! 体检数据模型定义
//! 测试项/分类得分/汇总结果，全部在单次请求生命周期内创建并丢弃

use serde::{Deserialize, Serialize};

use crate::rule::Confidence;
use crate::rule::platforms::Platform;

/// 测试项状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Warning,
    Info,
}

impl TestStatus {
    /// 状态对应的基准分（warning由具体测试自定中间分）
    pub fn base_score(&self) -> u8 {
        match self {
            TestStatus::Pass => 100,
            TestStatus::Fail => 0,
            TestStatus::Warning => 50,
            TestStatus::Info => 50,
        }
    }
}

/// 单项测试结果
/// 含静态标识字段，仅出站序列化
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTest {
    pub id: &'static str,
    pub name: &'static str,
    pub description: String,
    pub status: TestStatus,
    pub score: u8,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl AuditTest {
    fn new(
        id: &'static str,
        name: &'static str,
        weight: f64,
        status: TestStatus,
        score: u8,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name,
            description: description.into(),
            status,
            score,
            weight,
            details: None,
            recommendation: None,
        }
    }

    pub fn pass(
        id: &'static str,
        name: &'static str,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self::new(id, name, weight, TestStatus::Pass, 100, description)
    }

    pub fn fail(
        id: &'static str,
        name: &'static str,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self::new(id, name, weight, TestStatus::Fail, 0, description)
    }

    /// warning的中间分由调用方指定
    pub fn warning(
        id: &'static str,
        name: &'static str,
        weight: f64,
        score: u8,
        description: impl Into<String>,
    ) -> Self {
        Self::new(id, name, weight, TestStatus::Warning, score.min(100), description)
    }

    pub fn info(
        id: &'static str,
        name: &'static str,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self::new(id, name, weight, TestStatus::Info, 50, description)
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// 体检分类（固定十项，声明顺序即汇总与关键问题的收集顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Trust,
    Checkout,
    Shipping,
    Performance,
    Products,
    Descriptions,
    Search,
    Urgency,
    Upselling,
    Seo,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 10] = [
        CategoryKind::Trust,
        CategoryKind::Checkout,
        CategoryKind::Shipping,
        CategoryKind::Performance,
        CategoryKind::Products,
        CategoryKind::Descriptions,
        CategoryKind::Search,
        CategoryKind::Urgency,
        CategoryKind::Upselling,
        CategoryKind::Seo,
    ];

    /// 全局得分用的分类权重（与测试项权重是两套独立体系，不可混用）
    pub fn global_weight(self) -> f64 {
        match self {
            CategoryKind::Trust => 2.0,
            CategoryKind::Checkout => 2.0,
            CategoryKind::Shipping => 1.5,
            CategoryKind::Performance => 1.5,
            CategoryKind::Products => 1.5,
            CategoryKind::Descriptions => 1.0,
            CategoryKind::Search => 1.0,
            CategoryKind::Urgency => 1.0,
            CategoryKind::Upselling => 1.0,
            CategoryKind::Seo => 1.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CategoryKind::Trust => "Confianza",
            CategoryKind::Checkout => "Checkout",
            CategoryKind::Shipping => "Envíos",
            CategoryKind::Performance => "Rendimiento",
            CategoryKind::Products => "Productos",
            CategoryKind::Descriptions => "Descripciones",
            CategoryKind::Search => "Búsqueda y navegación",
            CategoryKind::Urgency => "Urgencia",
            CategoryKind::Upselling => "Venta cruzada",
            CategoryKind::Seo => "SEO",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CategoryKind::Trust => "Señales de confianza y seguridad para el comprador",
            CategoryKind::Checkout => "Fricción del carrito y medios de pago",
            CategoryKind::Shipping => "Información de envíos y entregas",
            CategoryKind::Performance => "Velocidad y peso de la página",
            CategoryKind::Products => "Presentación de productos y precios",
            CategoryKind::Descriptions => "Calidad de títulos y descripciones",
            CategoryKind::Search => "Buscador y navegación del catálogo",
            CategoryKind::Urgency => "Señales de escasez y promociones",
            CategoryKind::Upselling => "Productos relacionados y venta adicional",
            CategoryKind::Seo => "Fundamentos de posicionamiento",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategoryKind::Trust => "🛡️",
            CategoryKind::Checkout => "🛒",
            CategoryKind::Shipping => "🚚",
            CategoryKind::Performance => "⚡",
            CategoryKind::Products => "📦",
            CategoryKind::Descriptions => "📝",
            CategoryKind::Search => "🔍",
            CategoryKind::Urgency => "⏰",
            CategoryKind::Upselling => "📈",
            CategoryKind::Seo => "🌐",
        }
    }
}

/// 分类得分
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: CategoryKind,
    pub name: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub tests: Vec<AuditTest>,
    pub icon: &'static str,
}

/// 汇总计数（info不计入三态统计，total为全部测试项数）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub total: usize,
}

/// 关键问题条目（fail且测试权重>=2）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalIssue {
    pub category: CategoryKind,
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// 体检总结果（单次请求内组装）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAuditResult {
    pub url: String,
    pub final_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    pub platform: Platform,
    pub platform_confidence: Confidence,
    pub global_score: u8,
    pub categories: Vec<CategoryScore>,
    pub summary: AuditSummary,
    pub critical_issues: Vec<CriticalIssue>,
    pub top_recommendations: Vec<String>,
    // 单位：毫秒
    pub fetch_time: u64,
    pub analysis_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_base_scores() {
        assert_eq!(TestStatus::Pass.base_score(), 100);
        assert_eq!(TestStatus::Fail.base_score(), 0);
        assert_eq!(TestStatus::Info.base_score(), 50);
    }

    #[test]
    fn test_category_declaration_order() {
        assert_eq!(CategoryKind::ALL[0], CategoryKind::Trust);
        assert_eq!(CategoryKind::ALL[9], CategoryKind::Seo);
        assert_eq!(CategoryKind::ALL.len(), 10);
    }

    #[test]
    fn test_category_weight_table() {
        let total: f64 = CategoryKind::ALL.iter().map(|c| c.global_weight()).sum();
        assert!((total - 13.5).abs() < f64::EPSILON);
        assert_eq!(CategoryKind::Trust.global_weight(), 2.0);
        assert_eq!(CategoryKind::Shipping.global_weight(), 1.5);
        assert_eq!(CategoryKind::Seo.global_weight(), 1.0);
    }

    #[test]
    fn test_audit_test_serializes_camel_case() {
        let test = AuditTest::fail("ssl-certificate", "Certificado SSL", 3.0, "Sin HTTPS")
            .recommendation("Activá HTTPS en tu tienda");
        let json = serde_json::to_value(&test).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["score"], 0);
        assert!(json.get("details").is_none());
        assert_eq!(json["recommendation"], "Activá HTTPS en tu tienda");
    }
}
