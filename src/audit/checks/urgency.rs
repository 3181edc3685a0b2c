//! 紧迫感测试组
//! 缺失多按info处理：紧迫感是优化项而非缺陷

use super::CheckContext;
use crate::audit::model::AuditTest;

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![scarcity_signals(ctx), promotions(ctx), countdown(ctx)]
}

fn scarcity_signals(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "últimas unidades", "ultimas unidades", "quedan", "limited stock", "pocas unidades", "casi agotado",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "scarcity-signals",
            "Señales de escasez",
            1.5,
            "Se comunican señales de escasez",
        )
    } else {
        AuditTest::info(
            "scarcity-signals",
            "Señales de escasez",
            1.5,
            "Sin señales de escasez",
        )
    }
}

fn promotions(ctx: &CheckContext) -> AuditTest {
    let markers = ["oferta", "sale", "descuento", "% off", "promo", "rebaja"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "promotions",
            "Promociones visibles",
            1.0,
            "Hay promociones o descuentos comunicados",
        )
    } else {
        AuditTest::warning(
            "promotions",
            "Promociones visibles",
            1.0,
            40,
            "No se detectaron promociones",
        )
    }
}

fn countdown(ctx: &CheckContext) -> AuditTest {
    let markers = ["countdown", "cuenta regresiva", "termina en"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "countdown",
            "Contador de tiempo",
            1.0,
            "Existe contador de oferta",
        )
    } else {
        AuditTest::info("countdown", "Contador de tiempo", 1.0, "Sin contadores de oferta")
    }
}
