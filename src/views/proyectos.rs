use axum::response::Html;

use super::{escape, layout};
use crate::models::docente::DocenteOpcion;
use crate::models::proyecto::{Proyecto, ProyectoConJefe};
use crate::utils::flash::Flash;

fn docente_select(docentes: &[DocenteOpcion], selected: Option<i32>) -> String {
    let mut options = vec![format!(
        r#"<option value=""{}>Sin docente jefe</option>"#,
        if selected.is_none() { " selected" } else { "" }
    )];
    options.extend(docentes.iter().map(|d| {
        format!(
            r#"<option value="{}"{}>{}</option>"#,
            d.codigo,
            if selected == Some(d.codigo) { " selected" } else { "" },
            escape(&d.nombre)
        )
    }));
    format!(r#"<select name="docente_jefe">{}</select>"#, options.join(""))
}

/// Campos del formulario de proyecto, vacíos o con los valores actuales
fn proyecto_fields(proyecto: Option<&Proyecto>, docentes: &[DocenteOpcion]) -> String {
    let text = |f: fn(&Proyecto) -> String| proyecto.map(f).map(|v| escape(&v)).unwrap_or_default();
    format!(
        r#"<input name="nombre" placeholder="Nombre" value="{nombre}" required maxlength="150">
<input name="aliado" placeholder="Aliado" value="{aliado}" required maxlength="150">
<input name="descripcion" placeholder="Descripción" value="{descripcion}" required maxlength="2000">
<input name="presupuesto" type="number" step="0.01" min="0" placeholder="Presupuesto" value="{presupuesto}" required>
<input name="horas_estimadas" type="number" min="0" placeholder="Horas estimadas" value="{horas}" required>
<input name="fecha_inicio" type="date" value="{inicio}" required>
<input name="fecha_fin" type="date" value="{fin}" required>
{select}"#,
        nombre = text(|p| p.nombre.clone()),
        aliado = text(|p| p.aliado.clone()),
        descripcion = text(|p| p.descripcion.clone()),
        presupuesto = text(|p| p.presupuesto.to_string()),
        horas = text(|p| p.horasestimadas.to_string()),
        inicio = text(|p| p.fechainicio.to_string()),
        fin = text(|p| p.fechafin.to_string()),
        select = docente_select(docentes, proyecto.and_then(|p| p.docentejefe)),
    )
}

fn proyecto_row(fila: &ProyectoConJefe, docentes: &[DocenteOpcion]) -> String {
    let proyecto = &fila.proyecto;
    let jefe = fila
        .nombre_jefe
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "Sin asignar".to_string());
    format!(
        r#"<tr>
<td>{codigo}</td>
<td>{nombre}</td>
<td>{jefe}</td>
<td>{inicio} a {fin}</td>
<td><form method="post" action="/proyecto/update/{codigo}">
{campos}
<button type="submit">Actualizar</button>
</form></td>
<td><a href="/proyecto/delete/{codigo}">Eliminar</a></td>
</tr>"#,
        codigo = proyecto.codigo,
        nombre = escape(&proyecto.nombre),
        jefe = jefe,
        inicio = proyecto.fechainicio,
        fin = proyecto.fechafin,
        campos = proyecto_fields(Some(proyecto), docentes),
    )
}

pub fn proyectos_page(
    proyectos: &[ProyectoConJefe],
    docentes: &[DocenteOpcion],
    flash: Option<&Flash>,
) -> Html<String> {
    let filas = if proyectos.is_empty() {
        r#"<tr><td colspan="6">No hay proyectos registrados.</td></tr>"#.to_string()
    } else {
        proyectos
            .iter()
            .map(|p| proyecto_row(p, docentes))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<h2>Nuevo proyecto</h2>
<form method="post" action="/proyecto/add">
{campos}
<button type="submit">Añadir</button>
</form>
<h2>Listado</h2>
<table>
<thead><tr><th>Código</th><th>Nombre</th><th>Docente jefe</th><th>Fechas</th><th>Datos</th><th></th></tr></thead>
<tbody>
{filas}
</tbody>
</table>"#,
        campos = proyecto_fields(None, docentes),
        filas = filas,
    );

    layout("Proyectos", flash, &body)
}
