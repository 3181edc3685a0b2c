//! 商品展示测试组

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckContext;
use crate::audit::model::AuditTest;

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap());
static IMG_WITH_ALT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img\b[^>]*\balt\s*=\s*["'][^"']+["'][^>]*>"#).unwrap());
static PRICE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$\s*\d|\bprecio\b|\bprice\b|\bars\b|\busd\b|\beur\b").unwrap());

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        product_images(ctx),
        image_alt_text(ctx),
        price_visibility(ctx),
        stock_signals(ctx),
    ]
}

fn product_images(ctx: &CheckContext) -> AuditTest {
    let count = IMG_TAG.find_iter(ctx.html).count();
    if count > 0 {
        AuditTest::pass(
            "product-images",
            "Imágenes de producto",
            2.0,
            "La página contiene imágenes",
        )
        .details(format!("{count} imágenes"))
    } else {
        AuditTest::fail(
            "product-images",
            "Imágenes de producto",
            2.0,
            "La página no contiene ninguna imagen",
        )
        .recommendation("Sumá fotos de producto de calidad: sin imágenes no hay conversión")
    }
}

fn image_alt_text(ctx: &CheckContext) -> AuditTest {
    let total = IMG_TAG.find_iter(ctx.html).count();
    if total == 0 {
        return AuditTest::info(
            "image-alt-text",
            "Texto alternativo",
            1.5,
            "Sin imágenes que evaluar",
        );
    }

    let with_alt = IMG_WITH_ALT.find_iter(ctx.html).count();
    let ratio = with_alt as f64 / total as f64;
    let details = format!("{with_alt}/{total} con alt");

    if ratio >= 0.8 {
        AuditTest::pass("image-alt-text", "Texto alternativo", 1.5, "La mayoría de las imágenes tiene alt")
            .details(details)
    } else if ratio >= 0.4 {
        AuditTest::warning(
            "image-alt-text",
            "Texto alternativo",
            1.5,
            50,
            "Varias imágenes sin texto alternativo",
        )
        .details(details)
    } else {
        AuditTest::fail(
            "image-alt-text",
            "Texto alternativo",
            1.5,
            "Casi ninguna imagen tiene texto alternativo",
        )
        .details(details)
        .recommendation("Agregá atributos alt descriptivos: mejoran SEO y accesibilidad")
    }
}

fn price_visibility(ctx: &CheckContext) -> AuditTest {
    if PRICE_MARKER.is_match(ctx.html) {
        AuditTest::pass(
            "price-visibility",
            "Precios visibles",
            2.0,
            "Se detectaron precios en la página",
        )
    } else {
        AuditTest::fail(
            "price-visibility",
            "Precios visibles",
            2.0,
            "No se detectaron precios",
        )
        .recommendation("Mostrá los precios sin pasos intermedios: ocultarlos ahuyenta compradores")
    }
}

fn stock_signals(ctx: &CheckContext) -> AuditTest {
    let markers = ["stock", "disponib", "available", "agotado", "sold out", "sin stock"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "stock-signals",
            "Disponibilidad",
            1.0,
            "La página comunica disponibilidad de productos",
        )
    } else {
        AuditTest::info(
            "stock-signals",
            "Disponibilidad",
            1.0,
            "Sin señales de stock detectables",
        )
    }
}
