use serde_json::Value;

/// Pretty-print JSON to stdout.
///
/// Decimal amounts and ratios arrive as strings and undefined rates as `null`;
/// both are written unchanged. Analysis warnings are also logged so they
/// surface on stderr when stdout is piped.
pub fn print_json(value: &Value) {
    for warning in envelope_warnings(value) {
        tracing::warn!("{}", warning);
    }
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

fn envelope_warnings(value: &Value) -> Vec<&str> {
    value
        .get("warnings")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
