pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a scalar for a table cell or CSV field. Nulls become `-`, matching
/// how undefined ratios and growth rates are displayed.
pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Flatten nested objects into dotted keys (`thresholds.good`). Arrays are
/// kept as a single JSON-encoded field.
pub(crate) fn flatten_object(value: &Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_object(val, &path, out);
            }
        }
        other => out.push((prefix.to_string(), format_scalar(other))),
    }
}

/// Column headers and rows for an array of objects.
pub(crate) fn tabulate(rows: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers: Vec<String> = Vec::new();
    let mut flat_rows: Vec<Vec<(String, String)>> = Vec::with_capacity(rows.len());

    for row in rows {
        let mut fields = Vec::new();
        flatten_object(row, "", &mut fields);
        for (key, _) in &fields {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
        flat_rows.push(fields);
    }

    let body = flat_rows
        .into_iter()
        .map(|fields| {
            headers
                .iter()
                .map(|h| {
                    fields
                        .iter()
                        .find(|(k, _)| k == h)
                        .map(|(_, v)| v.clone())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    (headers, body)
}
