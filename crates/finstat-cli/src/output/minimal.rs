use serde_json::Value;

use super::format_scalar;

/// Fields printed by `--output minimal`, in priority order.
const PRIORITY_KEYS: [&str; 4] = ["amount", "summary", "current_value", "prior_to_current"];

/// Print just the key answer.
///
/// Objects print their highest-priority field. Arrays of records print one
/// `label: value` line per record, so a ratio suite reads as six lines
/// (`ROE: 20.0% (양호)`).
pub fn print_minimal(value: &Value) {
    let body = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match body {
        Value::Array(items) => {
            for item in items {
                println!("{}", record_line(item));
            }
        }
        Value::Object(map) => {
            let priority = PRIORITY_KEYS
                .iter()
                .find_map(|key| map.get(*key).filter(|v| !v.is_null()));
            // Growth analysis: one line per tracked account.
            let records = map
                .get("accounts")
                .and_then(Value::as_array)
                .filter(|items| items.iter().all(Value::is_object));
            match (priority, records) {
                (Some(val), _) => println!("{}", format_scalar(val)),
                (None, Some(items)) => {
                    for item in items {
                        println!("{}", record_line(item));
                    }
                }
                (None, None) => match map.values().next() {
                    Some(val) => println!("{}", format_scalar(val)),
                    None => println!("{}", format_scalar(body)),
                },
            }
        }
        other => println!("{}", format_scalar(other)),
    }
}

fn record_line(item: &Value) -> String {
    let Value::Object(map) = item else {
        return format_scalar(item);
    };

    let label = ["label", "name", "account"]
        .iter()
        .find_map(|k| map.get(*k).and_then(Value::as_str))
        .unwrap_or("-");
    let value = ["display"]
        .iter()
        .chain(PRIORITY_KEYS.iter())
        .chain(["current"].iter())
        .find_map(|k| map.get(*k))
        .map(format_scalar)
        .unwrap_or_else(|| "-".to_string());

    let status = ["badge", "status"]
        .iter()
        .find_map(|k| map.get(*k).and_then(Value::as_str));
    match status {
        Some(status) => format!("{label}: {value} ({status})"),
        None => format!("{label}: {value}"),
    }
}
