use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Column order for item tables; unknown keys follow alphabetically.
const PREFERRED_COLUMNS: [&str; 4] = ["id", "description", "status", "created_at"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let rows = match serde_json::to_value(value)? {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        scalar => return Ok(value_to_cell(&scalar)),
    };

    if rows.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let mut columns = Vec::<String>::new();
    for row in &rows {
        if let Some(map) = row.as_object() {
            for key in map.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    if columns.is_empty() {
        let cells = rows
            .iter()
            .map(|row| vec![value_to_cell(row)])
            .collect::<Vec<_>>();
        return Ok(table::render_table(&["VALUE"], &cells, options));
    }
    columns.sort_by_key(|column| column_rank(column));

    let headers = columns.iter().map(|c| column_label(c)).collect::<Vec<_>>();
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let cells = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    row.get(column)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(table::render_table(&header_refs, &cells, options))
}

fn column_rank(column: &str) -> (usize, String) {
    let position = PREFERRED_COLUMNS
        .iter()
        .position(|preferred| *preferred == column)
        .unwrap_or(PREFERRED_COLUMNS.len());
    (position, column.to_string())
}

fn column_label(column: &str) -> String {
    match column {
        "created_at" => String::from("CREATED"),
        other => other.to_ascii_uppercase(),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
