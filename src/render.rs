use crate::models::{Row, Statistics};
use crate::responses::RenderModel;
use serde_json::Value;

pub const NO_DATA: &str = "<p>No hay datos disponibles</p>";

pub fn render_model(model: &RenderModel) -> String {
    match model {
        RenderModel::Statistics(stats) => statistics_card(stats),
        RenderModel::Columns(columns) => column_options(columns),
        RenderModel::Rows(rows) => data_table(rows),
        RenderModel::Analysis(value) => analysis_block(value),
        RenderModel::Record(row) => record_table(row),
    }
}

pub fn statistics_card(stats: &Statistics) -> String {
    let mut html = format!(
        concat!(
            "<div class=\"stat-item\"><strong>Total Registros</strong><div>{}</div></div>",
            "<div class=\"stat-item\"><strong>Columnas</strong><div>{}</div></div>"
        ),
        stats.total_registros,
        stats.column_count()
    );
    if let Some(summary) = column_summary(stats) {
        html.push_str(&summary);
    }
    html
}

// Per-column dtype and null counts, in `columnas` order when the backend
// sends it.
fn column_summary(stats: &Statistics) -> Option<String> {
    let types = stats.tipos_datos.as_ref()?;
    let names: Vec<&String> = match &stats.columnas {
        Some(columns) => columns.iter().collect(),
        None => types.keys().collect(),
    };

    let mut html = String::from(
        "<table class=\"column-summary\"><thead><tr><th>Columna</th><th>Tipo</th><th>Nulos</th></tr></thead><tbody>",
    );
    for name in names {
        let dtype = types.get(name).map(String::as_str).unwrap_or_default();
        let nulls = stats
            .registros_nulos
            .as_ref()
            .and_then(|nulls| nulls.get(name))
            .map(u64::to_string)
            .unwrap_or_default();
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            html_escape(name),
            html_escape(dtype),
            nulls
        ));
    }
    html.push_str("</tbody></table>");
    Some(html)
}

/// Renders rows as a table whose header is the first row's keys. Later rows
/// are projected onto that header; keys they lack become blank cells.
pub fn data_table(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return NO_DATA.to_string();
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut html = String::from("<table><thead><tr>");
    for header in &headers {
        html.push_str(&format!("<th>{}</th>", html_escape(header)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for header in &headers {
            html.push_str(&format!("<td>{}</td>", html_escape(&cell_text(row.get(*header)))));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        // Whole floats print without a trailing `.0`, as `100` not `100.0`.
        Some(Value::Number(number)) => match number.as_f64() {
            Some(float) if number.is_f64() => float.to_string(),
            _ => number.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

pub fn column_options(columns: &[String]) -> String {
    columns
        .iter()
        .map(|column| {
            let name = html_escape(column);
            format!("<option value=\"{name}\">{name}</option>")
        })
        .collect()
}

pub fn analysis_block(value: &Value) -> String {
    match value {
        Value::String(text) => format!("<p>{}</p>", html_escape(text)),
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let rows: Vec<Row> = items.iter().filter_map(|item| item.as_object().cloned()).collect();
            data_table(&rows)
        }
        other => {
            let pretty = serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string());
            format!("<pre>{}</pre>", html_escape(&pretty))
        }
    }
}

pub fn record_table(row: &Row) -> String {
    if row.is_empty() {
        return NO_DATA.to_string();
    }
    let mut html =
        String::from("<table class=\"record\"><thead><tr><th>Campo</th><th>Valor</th></tr></thead><tbody>");
    for (field, value) in row {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            html_escape(field),
            html_escape(&cell_text(Some(value)))
        ));
    }
    html.push_str("</tbody></table>");
    html
}

pub fn alert(message: &str) -> String {
    format!("<div class=\"alert\" role=\"alert\">{}</div>", html_escape(message))
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
