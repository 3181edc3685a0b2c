//! 端到端评估场景测试（不发起网络请求，直接喂HTML与Header）

use std::collections::HashMap;

use storescan::audit::{TestStatus, evaluate_store};
use storescan::detector::detect_technologies;
use storescan::fetcher::normalize_url;
use storescan::rule::Confidence;
use storescan::rule::platforms::Platform;
use storescan::{ScanError, detect_platform};

fn no_headers() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn wordpress_site_detected_with_high_confidence() {
    let html = r#"
        <html><head>
        <link href="/wp-content/themes/x/style.css" rel="stylesheet">
        <meta name="generator" content="WordPress 6.4">
        </head><body></body></html>
    "#;

    let detected = detect_technologies(html, &no_headers());
    let wp = detected
        .iter()
        .find(|t| t.name == "WordPress")
        .expect("WordPress no detectado");
    assert_eq!(wp.confidence, Confidence::High);
}

#[test]
fn shopify_store_classified_as_platform_high() {
    let html = r#"
        <script src="https://cdn.shopify.com/s/files/1/0001/theme.js"></script>
        <script>window.Shopify = window.Shopify || {}; Shopify.theme = {"name":"Dawn"};</script>
    "#;

    let (platform, confidence) = detect_platform(html, &no_headers());
    assert_eq!(platform, Platform::Shopify);
    assert_eq!(confidence, Confidence::High);

    let result = evaluate_store("https://demo.com", "https://demo.com/", html, &no_headers(), 200);
    assert_eq!(result.platform, Platform::Shopify);
    assert_eq!(result.platform_confidence, Confidence::High);
}

#[test]
fn empty_page_produces_defined_result_without_passes() {
    let detected = detect_technologies("", &no_headers());
    assert!(detected.is_empty());

    let result = evaluate_store("http://x.com", "http://x.com/", "", &no_headers(), 0);
    assert!(result.global_score <= 100);
    assert_eq!(result.summary.passed, 0);

    for category in &result.categories {
        assert!((0..=100).contains(&category.score));
        for test in &category.tests {
            assert_ne!(test.status, TestStatus::Pass);
        }
    }
}

#[test]
fn summary_accounting_holds_for_rich_page() {
    let html = r#"
        <html><head>
        <title>Tienda Prueba | Moda urbana</title>
        <meta name="description" content="Moda urbana con envío gratis a todo el país y devoluciones sin cargo dentro de 30 días.">
        <meta property="og:site_name" content="Tienda Prueba">
        <meta property="og:image" content="/portada.jpg">
        <link rel="canonical" href="https://tiendaprueba.com/">
        </head><body>
        <nav>menu</nav>
        <h1>Zapatillas</h1>
        <input type="search" name="q">
        <p>Envío gratis desde $60.000. Aceptamos visa, mastercard y mercadopago.</p>
        <p>Precio: $12.999 — stock disponible. Agregar al carrito.</p>
        <p>Productos relacionados y destacados de la semana en oferta.</p>
        <p>Contacto: <a href="mailto:hola@tiendaprueba.com">escribinos</a>. Devoluciones y reseñas de clientes.</p>
        <img src="/a.jpg" alt="Zapatilla urbana" loading="lazy">
        </body></html>
    "#;

    let result = evaluate_store(
        "https://tiendaprueba.com",
        "https://tiendaprueba.com/",
        html,
        &no_headers(),
        300,
    );

    let expected_total: usize = result.categories.iter().map(|c| c.tests.len()).sum();
    assert_eq!(result.summary.total, expected_total);
    assert!(result.summary.passed + result.summary.failed + result.summary.warnings <= result.summary.total);
    assert_eq!(result.store_name.as_deref(), Some("Tienda Prueba"));
    assert!(result.global_score > 50, "página rica debería superar 50: {}", result.global_score);
    assert!(result.critical_issues.len() <= 5);
    assert!(result.top_recommendations.len() <= 5);
}

#[test]
fn evaluation_is_deterministic() {
    let html = r#"<title>X</title><script src="/jquery.min.js"></script><p>precio $100 carrito</p>"#;
    let headers: HashMap<String, String> =
        [("server".to_string(), "nginx/1.25".to_string())].into();

    let a = serde_json::to_string(&detect_technologies(html, &headers)).unwrap();
    let b = serde_json::to_string(&detect_technologies(html, &headers)).unwrap();
    assert_eq!(a, b);

    let r1 = evaluate_store("https://x.com", "https://x.com/", html, &headers, 120);
    let r2 = evaluate_store("https://x.com", "https://x.com/", html, &headers, 120);
    assert_eq!(
        serde_json::to_value(&r1.categories).unwrap(),
        serde_json::to_value(&r2.categories).unwrap()
    );
    assert_eq!(r1.global_score, r2.global_score);
}

#[test]
fn url_gate_rejects_private_ranges_before_fetch() {
    assert!(matches!(
        normalize_url("http://192.168.1.5"),
        Err(ScanError::BlockedUrl(_))
    ));
    assert!(matches!(normalize_url(""), Err(ScanError::MissingUrl)));
    assert!(normalize_url("tiendaprueba.com").is_ok());
}

#[test]
fn server_headers_influence_detection() {
    let headers: HashMap<String, String> = [
        ("server".to_string(), "cloudflare".to_string()),
        ("cf-ray".to_string(), "8a1b2c3d4e5f".to_string()),
    ]
    .into();

    let detected = detect_technologies("", &headers);
    let cf = detected
        .iter()
        .find(|t| t.name == "Cloudflare")
        .expect("Cloudflare no detectado");
    // 两条header模式命中 => high
    assert_eq!(cf.confidence, Confidence::High);
}
