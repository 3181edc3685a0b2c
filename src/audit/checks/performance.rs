//! 性能测试组
//! 仅基于单次抓取可得的信号：响应耗时、文档体积、脚本数量、图片加载策略、缓存策略

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckContext;
use crate::audit::model::AuditTest;

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img\b").unwrap());
static LAZY_IMG: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)loading\s*=\s*["']?lazy"#).unwrap());

pub fn run(ctx: &CheckContext) -> Vec<AuditTest> {
    vec![
        response_time(ctx),
        document_size(ctx),
        script_count(ctx),
        lazy_images(ctx),
        cache_headers(ctx),
    ]
}

fn response_time(ctx: &CheckContext) -> AuditTest {
    let ms = ctx.response_time_ms;
    // 0表示无测量数据，不能当作瞬时响应
    if ms == 0 {
        return AuditTest::info(
            "response-time",
            "Tiempo de respuesta",
            2.0,
            "Sin medición de tiempo de respuesta",
        );
    }
    let details = format!("{ms} ms");
    if ms < 800 {
        AuditTest::pass(
            "response-time",
            "Tiempo de respuesta",
            2.0,
            "El servidor respondió rápido",
        )
        .details(details)
    } else if ms < 2000 {
        AuditTest::warning(
            "response-time",
            "Tiempo de respuesta",
            2.0,
            60,
            "El servidor respondió con demora moderada",
        )
        .details(details)
    } else {
        AuditTest::fail(
            "response-time",
            "Tiempo de respuesta",
            2.0,
            "El servidor tardó demasiado en responder",
        )
        .details(details)
        .recommendation("Revisá el hosting o activá una capa de caché: más de 2 segundos de espera cuesta ventas")
    }
}

fn document_size(ctx: &CheckContext) -> AuditTest {
    let bytes = ctx.html.len();
    if bytes == 0 {
        return AuditTest::fail(
            "document-size",
            "Peso del documento",
            1.5,
            "La página devolvió un documento vacío",
        )
        .recommendation("Verificá que la URL apunte a la portada real de la tienda");
    }
    let details = format!("{} KB", bytes / 1024);
    if bytes < 150 * 1024 {
        AuditTest::pass("document-size", "Peso del documento", 1.5, "HTML liviano").details(details)
    } else if bytes < 400 * 1024 {
        AuditTest::warning(
            "document-size",
            "Peso del documento",
            1.5,
            50,
            "HTML pesado",
        )
        .details(details)
    } else {
        AuditTest::fail(
            "document-size",
            "Peso del documento",
            1.5,
            "HTML excesivamente pesado",
        )
        .details(details)
        .recommendation("Reducí el HTML inicial: mové widgets y datos embebidos a carga diferida")
    }
}

fn script_count(ctx: &CheckContext) -> AuditTest {
    let count = ctx.features.script_srcs.len();
    if count == 0 {
        return AuditTest::info(
            "script-count",
            "Cantidad de scripts",
            1.0,
            "Sin scripts externos detectados",
        );
    }
    let details = format!("{count} scripts externos");
    if count <= 15 {
        AuditTest::pass("script-count", "Cantidad de scripts", 1.0, "Cantidad razonable de scripts")
            .details(details)
    } else if count <= 30 {
        AuditTest::warning(
            "script-count",
            "Cantidad de scripts",
            1.0,
            50,
            "Muchos scripts externos",
        )
        .details(details)
    } else {
        AuditTest::fail(
            "script-count",
            "Cantidad de scripts",
            1.0,
            "Cantidad excesiva de scripts externos",
        )
        .details(details)
        .recommendation("Auditá los scripts de terceros y eliminá los que no aporten conversión")
    }
}

fn lazy_images(ctx: &CheckContext) -> AuditTest {
    if !IMG_TAG.is_match(ctx.html) {
        return AuditTest::info(
            "lazy-images",
            "Carga diferida de imágenes",
            1.0,
            "La página no contiene imágenes",
        );
    }
    if LAZY_IMG.is_match(ctx.html) {
        AuditTest::pass(
            "lazy-images",
            "Carga diferida de imágenes",
            1.0,
            "Las imágenes usan loading=lazy",
        )
    } else {
        AuditTest::warning(
            "lazy-images",
            "Carga diferida de imágenes",
            1.0,
            40,
            "Ninguna imagen declara carga diferida",
        )
    }
}

/// 注意content-encoding在客户端解压后不可见，这里只看缓存策略
fn cache_headers(ctx: &CheckContext) -> AuditTest {
    if ctx.headers.contains_key("cache-control") || ctx.headers.contains_key("expires") {
        AuditTest::pass(
            "cache-headers",
            "Política de caché",
            1.5,
            "El servidor declara política de caché",
        )
    } else {
        AuditTest::warning(
            "cache-headers",
            "Política de caché",
            1.5,
            50,
            "Sin cabeceras de caché",
        )
    }
}
