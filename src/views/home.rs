use axum::response::Html;

use super::layout;

pub fn home_page() -> Html<String> {
    layout(
        "Gestión de proyectos informáticos",
        None,
        r#"<ul>
<li><a href="/docentes">Docentes</a>: registro de docentes y su experiencia.</li>
<li><a href="/proyectos">Proyectos</a>: proyectos, aliados y docente jefe.</li>
</ul>"#,
    )
}
