//! 结算流程测试组

use super::CheckContext;
use crate::audit::model::AuditTest;

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        cart_presence(ctx),
        payment_methods(ctx),
        guest_checkout(ctx),
        express_checkout(ctx),
    ]
}

fn cart_presence(ctx: &CheckContext) -> AuditTest {
    let markers = ["carrito", "cart", "checkout", "agregar al carrito", "add to cart"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "cart-presence",
            "Carrito de compras",
            2.0,
            "Se detectó carrito o flujo de checkout",
        )
    } else {
        AuditTest::fail(
            "cart-presence",
            "Carrito de compras",
            2.0,
            "No se detectó carrito ni botón de compra",
        )
        .recommendation("Asegurate de que el botón de compra sea visible en cada producto")
    }
}

fn payment_methods(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "visa", "mastercard", "paypal", "mercadopago", "mercado pago", "stripe", "klarna", "webpay", "transferencia",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "payment-methods",
            "Medios de pago",
            2.0,
            "La página comunica medios de pago",
        )
    } else {
        AuditTest::fail(
            "payment-methods",
            "Medios de pago",
            2.0,
            "No se detectaron medios de pago visibles",
        )
        .recommendation("Mostrá los logos de los medios de pago aceptados: reducen el abandono en checkout")
    }
}

fn guest_checkout(ctx: &CheckContext) -> AuditTest {
    let markers = ["invitado", "guest checkout", "comprar sin registrarse", "sin cuenta"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "guest-checkout",
            "Compra como invitado",
            1.0,
            "Se menciona compra sin registro",
        )
    } else {
        AuditTest::info(
            "guest-checkout",
            "Compra como invitado",
            1.0,
            "No se pudo determinar si existe compra sin registro",
        )
    }
}

fn express_checkout(ctx: &CheckContext) -> AuditTest {
    let markers = ["apple pay", "google pay", "shop pay", "one-click", "un click"];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "express-checkout",
            "Pago express",
            1.0,
            "Se detectaron opciones de pago express",
        )
    } else {
        AuditTest::info(
            "express-checkout",
            "Pago express",
            1.0,
            "Sin señales de pago express",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::checks::test_support::context_from;
    use crate::audit::model::TestStatus;

    #[test]
    fn test_empty_page_fails_critical_checks() {
        let (features, headers) = context_from("");
        let ctx = CheckContext::new("", &features, &headers, "https://x.com", 0);
        let tests = run(&ctx);
        assert_eq!(tests[0].status, TestStatus::Fail);
        assert_eq!(tests[1].status, TestStatus::Fail);
        // 信号缺失的低权重测试退化为info，不误报pass
        assert_eq!(tests[2].status, TestStatus::Info);
        assert_eq!(tests[3].status, TestStatus::Info);
    }

    #[test]
    fn test_mercadopago_counts_as_payment_method() {
        let html = "<img alt='Mercado Pago'> pagá con mercadopago";
        let (features, headers) = context_from(html);
        let ctx = CheckContext::new(html, &features, &headers, "https://x.com", 0);
        assert_eq!(run(&ctx)[1].status, TestStatus::Pass);
    }
}
