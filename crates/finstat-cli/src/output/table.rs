use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten_object, format_scalar, tabulate};

/// Format output as tables using the tabled crate.
///
/// Arrays of records become one table each; scalar fields of an object are
/// collected into a Field / Value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("result") => print_envelope(map),
        Value::Object(map) => print_sections(map),
        Value::Array(arr) => print_records(arr),
        other => println!("{}", format_scalar(other)),
    }
}

fn print_envelope(envelope: &Map<String, Value>) {
    match envelope.get("result") {
        Some(Value::Object(result)) => print_sections(result),
        Some(other) => print_table(other),
        None => {}
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_sections(map: &Map<String, Value>) {
    let mut scalars = Vec::new();

    for (key, val) in map {
        match val {
            Value::Array(arr) if arr.iter().any(Value::is_object) => {
                println!("\n{}:", key);
                print_records(arr);
            }
            Value::Object(inner) if inner.values().any(Value::is_array) => {
                println!("\n[{}]", key);
                print_sections(inner);
            }
            other => flatten_object(other, key, &mut scalars),
        }
    }

    if !scalars.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in scalars {
            builder.push_record([key, val]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_records(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if !arr.iter().all(Value::is_object) {
        for item in arr {
            println!("{}", format_scalar(item));
        }
        return;
    }

    let (headers, rows) = tabulate(arr);
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}
