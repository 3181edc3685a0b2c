//! 搜索与导航测试组

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckContext;
use crate::audit::model::AuditTest;

static SEARCH_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)type\s*=\s*["']?search|name\s*=\s*["']?q["']?|role\s*=\s*["']?search"#).unwrap()
});
static NAV_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<nav\b|role\s*=\s*["']?navigation"#).unwrap());

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![search_box(ctx), navigation_menu(ctx), breadcrumbs(ctx)]
}

fn search_box(ctx: &CheckContext) -> AuditTest {
    if SEARCH_INPUT.is_match(ctx.html) || ctx.contains_any(&["buscar", "búsqueda"]) {
        AuditTest::pass(
            "search-box",
            "Buscador interno",
            2.0,
            "La tienda ofrece buscador",
        )
    } else {
        AuditTest::fail(
            "search-box",
            "Buscador interno",
            2.0,
            "No se detectó buscador interno",
        )
        .recommendation("Agregá un buscador visible: los que buscan convierten varias veces más")
    }
}

fn navigation_menu(ctx: &CheckContext) -> AuditTest {
    if NAV_TAG.is_match(ctx.html) || ctx.html_lower.contains("menu") {
        AuditTest::pass(
            "navigation-menu",
            "Menú de navegación",
            1.5,
            "Existe navegación estructurada",
        )
    } else {
        AuditTest::warning(
            "navigation-menu",
            "Menú de navegación",
            1.5,
            40,
            "No se detectó menú de navegación",
        )
    }
}

fn breadcrumbs(ctx: &CheckContext) -> AuditTest {
    if ctx.contains_any(&["breadcrumb", "miga de pan"]) {
        AuditTest::pass(
            "breadcrumbs",
            "Migas de pan",
            1.0,
            "La página usa migas de pan",
        )
    } else {
        AuditTest::info("breadcrumbs", "Migas de pan", 1.0, "Sin migas de pan detectables")
    }
}
