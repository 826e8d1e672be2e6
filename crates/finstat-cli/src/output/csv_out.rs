use serde_json::Value;
use std::io;

use super::{flatten_object, format_scalar, tabulate};

/// Write output as CSV to stdout.
///
/// Arrays of records (ratios, growth, breakdown components) become one row per
/// record. Anything else is written as `field,value` pairs with dotted paths.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let body = match value {
        Value::Object(map) => map.get("result").unwrap_or(value),
        _ => value,
    };

    match body {
        Value::Array(arr) if arr.iter().all(Value::is_object) && !arr.is_empty() => {
            let (headers, rows) = tabulate(arr);
            let _ = wtr.write_record(&headers);
            for row in rows {
                let _ = wtr.write_record(&row);
            }
        }
        Value::Object(_) => {
            let mut fields = Vec::new();
            flatten_object(body, "", &mut fields);
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in fields {
                let _ = wtr.write_record([key, val]);
            }
        }
        Value::Array(arr) => {
            for item in arr {
                let _ = wtr.write_record([format_scalar(item)]);
            }
        }
        other => {
            let _ = wtr.write_record([format_scalar(other)]);
        }
    }

    let _ = wtr.flush();
}
