//! 电商平台签名表
//! 平台判定采用先到先得策略，表的迭代顺序即判定顺序，必须保持稳定
//! 因此使用有序切片而非HashMap承载

use serde::{Deserialize, Serialize};

/// 电商平台枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Shopify,
    Woocommerce,
    Magento,
    Prestashop,
    Tiendanube,
    Vtex,
    Custom,
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Shopify => "shopify",
            Platform::Woocommerce => "woocommerce",
            Platform::Magento => "magento",
            Platform::Prestashop => "prestashop",
            Platform::Tiendanube => "tiendanube",
            Platform::Vtex => "vtex",
            Platform::Custom => "custom",
            Platform::Unknown => "unknown",
        }
    }
}

/// 平台签名：去重计数的独立模式列表
#[derive(Debug, Clone)]
pub struct PlatformSignature {
    pub platform: Platform,
    pub patterns: &'static [&'static str],
}

/// 有序平台签名表
pub fn platform_table() -> &'static [PlatformSignature] {
    static TABLE: &[PlatformSignature] = &[
        PlatformSignature {
            platform: Platform::Shopify,
            patterns: &[
                r"cdn\.shopify\.com",
                r"(?i)Shopify\.theme",
                r"/cdn/shop/",
                r"(?i)x-shopify",
            ],
        },
        PlatformSignature {
            platform: Platform::Woocommerce,
            patterns: &[
                r"(?i)woocommerce",
                r"wc-ajax",
                r"/wp-content/plugins/woocommerce/",
            ],
        },
        PlatformSignature {
            platform: Platform::Magento,
            patterns: &[
                r"(?i)Mage\.Cookies",
                r"/static/version\d+/",
                r"(?i)x-magento",
            ],
        },
        PlatformSignature {
            platform: Platform::Prestashop,
            patterns: &[r"(?i)prestashop", r"/modules/ps_", r"(?i)presta-"],
        },
        PlatformSignature {
            platform: Platform::Tiendanube,
            patterns: &[
                r"(?i)tiendanube\.com",
                r"(?i)nuvemshop",
                r"(?i)tiendanube",
            ],
        },
        PlatformSignature {
            platform: Platform::Vtex,
            patterns: &[
                r"(?i)vteximg\.com\.br",
                r"(?i)vtexassets\.com",
                r"(?i)x-vtex",
            ],
        },
    ];
    TABLE
}

/// 通用电商特征（平台全部落空时的兜底判定）
pub fn generic_commerce_markers() -> &'static [&'static str] {
    static MARKERS: &[&str] = &[
        r"(?i)add[\s_-]?to[\s_-]?cart",
        r"(?i)checkout",
        r"(?i)\bprecio\b|\bprice\b",
        r"(?i)\bcarrito\b|\bcart\b",
    ];
    MARKERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_table_order_is_stable() {
        let order: Vec<Platform> = platform_table().iter().map(|p| p.platform).collect();
        assert_eq!(
            order,
            vec![
                Platform::Shopify,
                Platform::Woocommerce,
                Platform::Magento,
                Platform::Prestashop,
                Platform::Tiendanube,
                Platform::Vtex,
            ]
        );
    }

    #[test]
    fn test_platform_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Shopify).unwrap(), "\"shopify\"");
        assert_eq!(serde_json::to_string(&Platform::Unknown).unwrap(), "\"unknown\"");
    }
}
