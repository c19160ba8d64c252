use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a status line on stderr unless `--quiet`.
pub fn note(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_list(items),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render_rows(&["field", "value"], &rows, table_options())
        }
        scalar => cell(scalar),
    }
}

/// Objects become one row each with the union of their keys as columns.
fn render_list(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, table_options());
    }

    let mut headers: Vec<&str> = Vec::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_rows(&headers, &rows, table_options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
