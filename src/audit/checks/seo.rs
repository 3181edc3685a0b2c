//! SEO基础测试组

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckContext;
use crate::audit::model::AuditTest;

static CANONICAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<link\b[^>]*rel\s*=\s*["']?canonical"#).unwrap());
static LD_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)application/ld\+json|itemscope"#).unwrap());
static NOINDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)noindex").unwrap());

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        title_tag(ctx),
        canonical(ctx),
        open_graph(ctx),
        structured_data(ctx),
        robots_meta(ctx),
    ]
}

fn title_tag(ctx: &CheckContext) -> AuditTest {
    match &ctx.features.title {
        Some(title) => AuditTest::pass("title-tag", "Etiqueta title", 2.0, "La página define <title>")
            .details(format!("\"{title}\"")),
        None => AuditTest::fail("title-tag", "Etiqueta title", 2.0, "Falta la etiqueta <title>")
            .recommendation("Agregá un <title> único por página: es la señal SEO más básica"),
    }
}

fn canonical(ctx: &CheckContext) -> AuditTest {
    if CANONICAL_LINK.is_match(ctx.html) {
        AuditTest::pass("canonical-url", "URL canónica", 1.5, "Se declara URL canónica")
    } else {
        AuditTest::warning(
            "canonical-url",
            "URL canónica",
            1.5,
            50,
            "Sin URL canónica declarada",
        )
    }
}

fn open_graph(ctx: &CheckContext) -> AuditTest {
    let og_count = ctx
        .features
        .meta_tags
        .iter()
        .filter(|(name, _)| name.starts_with("og:"))
        .count();
    let details = format!("{og_count} etiquetas og:");

    if og_count >= 2 {
        AuditTest::pass("open-graph", "Open Graph", 1.0, "Metadatos para compartir completos")
            .details(details)
    } else if og_count == 1 {
        AuditTest::warning(
            "open-graph",
            "Open Graph",
            1.0,
            50,
            "Metadatos Open Graph incompletos",
        )
        .details(details)
    } else {
        AuditTest::fail("open-graph", "Open Graph", 1.0, "Sin metadatos Open Graph")
            .recommendation("Agregá og:title, og:image y og:description para que los enlaces compartidos se vean bien")
    }
}

fn structured_data(ctx: &CheckContext) -> AuditTest {
    if LD_JSON.is_match(ctx.html) {
        AuditTest::pass(
            "structured-data",
            "Datos estructurados",
            1.5,
            "La página incluye datos estructurados",
        )
    } else {
        AuditTest::warning(
            "structured-data",
            "Datos estructurados",
            1.5,
            40,
            "Sin datos estructurados (schema.org)",
        )
    }
}

/// noindex在商店首页几乎总是配置事故
fn robots_meta(ctx: &CheckContext) -> AuditTest {
    match ctx.features.meta_content("robots") {
        Some(content) if NOINDEX.is_match(content) => AuditTest::fail(
            "robots-meta",
            "Indexación",
            2.0,
            "La página está marcada como noindex",
        )
        .recommendation("Quitá el noindex del meta robots: los buscadores están ignorando tu tienda"),
        Some(_) => AuditTest::pass("robots-meta", "Indexación", 2.0, "La página permite indexación"),
        None => AuditTest::info(
            "robots-meta",
            "Indexación",
            2.0,
            "Sin meta robots, se asume indexable",
        ),
    }
}
