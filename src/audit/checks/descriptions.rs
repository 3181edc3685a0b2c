//! 文案质量测试组

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckContext;
use crate::audit::model::AuditTest;

static H1_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h1\b").unwrap());
static P_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<p\b").unwrap());

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        meta_description(ctx),
        title_quality(ctx),
        heading_structure(ctx),
        content_depth(ctx),
    ]
}

fn meta_description(ctx: &CheckContext) -> AuditTest {
    match ctx.features.meta_content("description") {
        Some(desc) if !desc.trim().is_empty() => {
            let len = desc.chars().count();
            let details = format!("{len} caracteres");
            if (50..=160).contains(&len) {
                AuditTest::pass(
                    "meta-description",
                    "Meta descripción",
                    2.0,
                    "Meta descripción con largo adecuado",
                )
                .details(details)
            } else {
                AuditTest::warning(
                    "meta-description",
                    "Meta descripción",
                    2.0,
                    60,
                    "Meta descripción fuera del rango recomendado (50-160)",
                )
                .details(details)
            }
        }
        _ => AuditTest::fail(
            "meta-description",
            "Meta descripción",
            2.0,
            "Falta la meta descripción",
        )
        .recommendation("Escribí una meta descripción de 50-160 caracteres con tu propuesta de valor"),
    }
}

fn title_quality(ctx: &CheckContext) -> AuditTest {
    match &ctx.features.title {
        Some(title) => {
            let len = title.chars().count();
            let details = format!("\"{title}\"");
            if (10..=70).contains(&len) {
                AuditTest::pass("title-quality", "Título de la página", 2.0, "Título con largo adecuado")
                    .details(details)
            } else {
                AuditTest::warning(
                    "title-quality",
                    "Título de la página",
                    2.0,
                    60,
                    "Título fuera del rango recomendado (10-70)",
                )
                .details(details)
            }
        }
        None => AuditTest::fail(
            "title-quality",
            "Título de la página",
            2.0,
            "La página no tiene <title>",
        )
        .recommendation("Definí un título que combine marca y categoría principal"),
    }
}

fn heading_structure(ctx: &CheckContext) -> AuditTest {
    if H1_TAG.is_match(ctx.html) {
        AuditTest::pass(
            "heading-structure",
            "Estructura de encabezados",
            1.0,
            "La página tiene encabezado principal",
        )
    } else {
        AuditTest::warning(
            "heading-structure",
            "Estructura de encabezados",
            1.0,
            40,
            "No se encontró <h1>",
        )
    }
}

fn content_depth(ctx: &CheckContext) -> AuditTest {
    let paragraphs = P_TAG.find_iter(ctx.html).count();
    let details = format!("{paragraphs} párrafos");
    if paragraphs >= 3 {
        AuditTest::pass("content-depth", "Profundidad de contenido", 1.0, "Contenido textual suficiente")
            .details(details)
    } else if paragraphs >= 1 {
        AuditTest::warning(
            "content-depth",
            "Profundidad de contenido",
            1.0,
            50,
            "Poco contenido textual",
        )
        .details(details)
    } else {
        AuditTest::fail(
            "content-depth",
            "Profundidad de contenido",
            1.0,
            "La página casi no tiene texto descriptivo",
        )
        .details(details)
        .recommendation("Describí tus productos con texto propio: ayuda a vender y a posicionar")
    }
}
