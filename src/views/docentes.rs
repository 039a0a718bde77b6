use axum::response::Html;

use super::{escape, layout};
use crate::models::docente::Docente;
use crate::utils::flash::Flash;

const NUEVO_DOCENTE: &str = r#"<h2>Nuevo docente</h2>
<form method="post" action="/docente/add">
<input name="documento" placeholder="Documento" required maxlength="20">
<input name="nombre" placeholder="Nombre" required maxlength="100">
<input name="direccion" placeholder="Dirección" required maxlength="150">
<input name="titulo" placeholder="Título" required maxlength="100">
<input name="anos_experiencia" type="number" min="0" max="80" placeholder="Años de experiencia" required>
<button type="submit">Añadir</button>
</form>"#;

fn docente_row(docente: &Docente) -> String {
    let ruta = urlencoding::encode(&docente.documento);
    format!(
        r#"<tr>
<td>{codigo}</td>
<td>{documento}</td>
<td><form method="post" action="/docente/update/{ruta}">
<input name="nombre" value="{nombre}" required maxlength="100">
<input name="direccion" value="{direccion}" required maxlength="150">
<input name="titulo" value="{titulo}" required maxlength="100">
<input name="anos_experiencia" type="number" min="0" max="80" value="{anos}" required>
<button type="submit">Actualizar</button>
</form></td>
<td><a href="/docente/delete/{ruta}">Eliminar</a></td>
</tr>"#,
        codigo = docente.codigo,
        documento = escape(&docente.documento),
        ruta = escape(&ruta),
        nombre = escape(&docente.nombre),
        direccion = escape(&docente.direccion),
        titulo = escape(&docente.titulo),
        anos = docente.anosexperiencia,
    )
}

pub fn docentes_page(docentes: &[Docente], flash: Option<&Flash>) -> Html<String> {
    let filas = if docentes.is_empty() {
        r#"<tr><td colspan="4">No hay docentes registrados.</td></tr>"#.to_string()
    } else {
        docentes.iter().map(docente_row).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        r#"{formulario}
<h2>Listado</h2>
<table>
<thead><tr><th>Código</th><th>Documento</th><th>Datos</th><th></th></tr></thead>
<tbody>
{filas}
</tbody>
</table>"#,
        formulario = NUEVO_DOCENTE,
        filas = filas,
    );

    layout("Docentes", flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docente(documento: &str, nombre: &str) -> Docente {
        Docente {
            codigo: 7,
            documento: documento.to_string(),
            nombre: nombre.to_string(),
            direccion: "Calle 1".to_string(),
            titulo: "MSc".to_string(),
            anosexperiencia: 5,
        }
    }

    #[test]
    fn test_rows_link_by_documento() {
        let Html(page) = docentes_page(&[docente("123", "Ana")], None);
        assert!(page.contains(r#"action="/docente/update/123""#));
        assert!(page.contains(r#"href="/docente/delete/123""#));
        assert!(page.contains(r#"value="Ana""#));
    }

    #[test]
    fn test_documento_is_encoded_in_paths() {
        let Html(page) = docentes_page(&[docente("CC 10/2", "Luis")], None);
        assert!(page.contains("/docente/delete/CC%2010%2F2"));
    }

    #[test]
    fn test_empty_listing() {
        let Html(page) = docentes_page(&[], Some(&Flash::success("Docente eliminado con éxito.")));
        assert!(page.contains("No hay docentes registrados."));
        assert!(page.contains("Docente eliminado con éxito."));
    }
}
