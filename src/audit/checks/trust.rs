//! 信任信号测试组

use super::CheckContext;
use crate::audit::model::AuditTest;

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        ssl_certificate(ctx),
        contact_information(ctx),
        return_policy(ctx),
        social_proof(ctx),
        security_headers(ctx),
    ]
}

/// HTTPS是买家信任的底线
fn ssl_certificate(ctx: &CheckContext) -> AuditTest {
    if ctx.final_url.starts_with("https://") {
        AuditTest::pass(
            "ssl-certificate",
            "Certificado SSL",
            3.0,
            "La tienda sirve sobre HTTPS",
        )
    } else {
        AuditTest::fail(
            "ssl-certificate",
            "Certificado SSL",
            3.0,
            "La tienda no usa HTTPS",
        )
        .recommendation("Activá un certificado SSL: sin HTTPS los navegadores marcan la tienda como no segura")
    }
}

fn contact_information(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "tel:", "mailto:", "contacto", "contact", "whatsapp", "wa.me",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "contact-information",
            "Datos de contacto",
            2.0,
            "Se encontraron vías de contacto visibles",
        )
    } else {
        AuditTest::fail(
            "contact-information",
            "Datos de contacto",
            2.0,
            "No se detectó teléfono, email ni WhatsApp",
        )
        .recommendation("Mostrá al menos una vía de contacto directa (WhatsApp, teléfono o email)")
    }
}

fn return_policy(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "devoluci", "devolución", "reembolso", "return policy", "refund", "cambios y devoluciones",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "return-policy",
            "Política de devoluciones",
            2.0,
            "La página menciona devoluciones o reembolsos",
        )
    } else {
        AuditTest::fail(
            "return-policy",
            "Política de devoluciones",
            2.0,
            "No se encontró mención a devoluciones ni reembolsos",
        )
        .recommendation("Publicá una política de devoluciones clara y enlazala desde el pie de página")
    }
}

fn social_proof(ctx: &CheckContext) -> AuditTest {
    let markers = [
        "reseñas", "reviews", "testimoni", "opiniones", "valoraciones", "rating", "estrellas",
    ];
    if ctx.contains_any(&markers) {
        AuditTest::pass(
            "social-proof",
            "Prueba social",
            1.5,
            "Se detectaron reseñas u opiniones de clientes",
        )
    } else {
        AuditTest::warning(
            "social-proof",
            "Prueba social",
            1.5,
            40,
            "No se detectaron reseñas ni testimonios",
        )
    }
}

/// 安全Header是部署层信号，缺失不一定意味着风险，按info处理
fn security_headers(ctx: &CheckContext) -> AuditTest {
    let present: Vec<&str> = ["strict-transport-security", "x-content-type-options", "content-security-policy"]
        .iter()
        .copied()
        .filter(|h| ctx.headers.contains_key(*h))
        .collect();

    if !present.is_empty() {
        AuditTest::pass(
            "security-headers",
            "Cabeceras de seguridad",
            1.0,
            "El servidor envía cabeceras de seguridad",
        )
        .details(present.join(", "))
    } else {
        AuditTest::info(
            "security-headers",
            "Cabeceras de seguridad",
            1.0,
            "Sin cabeceras de seguridad detectables",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::checks::test_support::context_from;
    use crate::audit::model::TestStatus;

    #[test]
    fn test_ssl_fails_on_plain_http() {
        let (features, headers) = context_from("<html></html>");
        let ctx = CheckContext::new("<html></html>", &features, &headers, "http://tienda.com", 100);
        let tests = run(&ctx);
        assert_eq!(tests[0].id, "ssl-certificate");
        assert_eq!(tests[0].status, TestStatus::Fail);
        assert!(tests[0].recommendation.is_some());
    }

    #[test]
    fn test_contact_detected_via_whatsapp() {
        let html = r#"<a href="https://wa.me/5491100000000">Escribinos</a>"#;
        let (features, headers) = context_from(html);
        let ctx = CheckContext::new(html, &features, &headers, "https://tienda.com", 100);
        let contact = &run(&ctx)[1];
        assert_eq!(contact.status, TestStatus::Pass);
    }
}
