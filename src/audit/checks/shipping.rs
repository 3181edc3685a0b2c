//! 物流信息测试组

use super::CheckContext;
use crate::audit::model::AuditTest;

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        shipping_information(ctx),
        free_shipping(ctx),
        shipping_calculator(ctx),
    ]
}

fn shipping_information(ctx: &CheckContext) -> AuditTest {
    let markers = ["envío", "envíos", "envio", "shipping", "delivery", "entrega"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "shipping-information",
            "Información de envíos",
            2.0,
            "La página comunica condiciones de envío",
        )
    } else {
        AuditTest::fail(
            "shipping-information",
            "Información de envíos",
            2.0,
            "No se encontró información de envíos",
        )
        .recommendation("Explicá costos y plazos de envío antes del checkout: es la duda #1 del comprador")
    }
}

fn free_shipping(ctx: &CheckContext) -> AuditTest {
    let markers = ["envío gratis", "envio gratis", "free shipping", "envío sin cargo"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "free-shipping",
            "Envío gratis",
            1.5,
            "Se comunica envío gratis o umbral de envío gratis",
        )
    } else {
        AuditTest::warning(
            "free-shipping",
            "Envío gratis",
            1.5,
            50,
            "No se detectó oferta de envío gratis",
        )
    }
}

fn shipping_calculator(ctx: &CheckContext) -> AuditTest {
    let markers = ["calcular envío", "calcular envio", "shipping calculator", "estimate shipping", "código postal"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "shipping-calculator",
            "Calculador de envío",
            1.0,
            "Existe calculador o estimador de envío",
        )
    } else {
        AuditTest::info(
            "shipping-calculator",
            "Calculador de envío",
            1.0,
            "Sin calculador de envío detectable",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::checks::test_support::context_from;
    use crate::audit::model::TestStatus;

    #[test]
    fn test_shipping_marker_in_spanish() {
        let html = "<p>Envíos a todo el país</p>";
        let (features, headers) = context_from(html);
        let ctx = CheckContext::new(html, &features, &headers, "https://x.com", 0);
        assert_eq!(run(&ctx)[0].status, TestStatus::Pass);
    }
}
