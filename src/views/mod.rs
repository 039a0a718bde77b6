//! Vistas HTML
//! 
//! Páginas renderizadas en el servidor: inicio, docentes, proyectos y la
//! página de error.

pub mod docentes;
pub mod home;
pub mod proyectos;

use axum::http::StatusCode;
use axum::response::Html;

use crate::utils::flash::Flash;

pub use docentes::docentes_page;
pub use home::home_page;
pub use proyectos::proyectos_page;

/// Escapar texto para HTML (contenido y atributos entre comillas)
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

fn flash_banner(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => format!(
            r#"<div class="alert alert-{}" role="alert">{}</div>"#,
            flash.kind.as_str(),
            escape(&flash.message)
        ),
        None => String::new(),
    }
}

/// Plantilla común de todas las páginas
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title} · Proyectos Informáticos</title>
</head>
<body>
<nav><a href="/">Inicio</a> | <a href="/docentes">Docentes</a> | <a href="/proyectos">Proyectos</a></nav>
<main>
<h1>{title}</h1>
{banner}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        banner = flash_banner(flash),
        body = body,
    ))
}

pub fn error_page(status: StatusCode, detail: &str) -> Html<String> {
    let title = format!("Error {}", status.as_u16());
    let flash = Flash::danger(detail);
    layout(&title, Some(&flash), r#"<p><a href="/">Volver al inicio</a></p>"#)
}
