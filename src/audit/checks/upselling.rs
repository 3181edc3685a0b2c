//! 追加销售测试组

use super::CheckContext;
use crate::audit::model::AuditTest;

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![related_products(ctx), cross_sell(ctx), featured_products(ctx)]
}

fn related_products(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "relacionados", "related products", "también te puede interesar", "tambien te puede interesar", "you may also like", "recomendados",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "related-products",
            "Productos relacionados",
            1.5,
            "Se muestran productos relacionados",
        )
    } else {
        AuditTest::warning(
            "related-products",
            "Productos relacionados",
            1.5,
            40,
            "No se detectaron productos relacionados",
        )
    }
}

fn cross_sell(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "frecuentemente comprados", "frequently bought", "completá tu compra", "combo", "bundle",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "cross-sell",
            "Venta cruzada",
            1.0,
            "Hay bloques de venta cruzada",
        )
    } else {
        AuditTest::info("cross-sell", "Venta cruzada", 1.0, "Sin bloques de venta cruzada")
    }
}

fn featured_products(ctx: &CheckContext) -> AuditTest {
    let markers = ["destacados", "featured", "best seller", "más vendidos", "mas vendidos"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "featured-products",
            "Productos destacados",
            1.0,
            "Existen productos destacados",
        )
    } else {
        AuditTest::info(
            "featured-products",
            "Productos destacados",
            1.0,
            "Sin sección de destacados",
        )
    }
}
