pub mod file;
pub mod stdin;

use finstat_core::source::parse_provider_response;
use finstat_core::statement::LineItem;
use finstat_core::metrics::ThresholdConfig;

/// Load line items from `--input` or piped stdin.
///
/// Accepts a bare array of line items or a provider envelope
/// (`{"status": "000", "list": [...]}`).
pub fn load_records(path: Option<&str>) -> Result<Vec<LineItem>, Box<dyn std::error::Error>> {
    let value = if let Some(path) = path {
        file::read_json_value(path)?
    } else if let Some(data) = stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or piped stdin is required".into());
    };

    let records = parse_provider_response(value)?;
    tracing::debug!(count = records.len(), "loaded line items");
    Ok(records)
}

/// Load health-bound overrides, or the defaults when no file is given.
pub fn load_thresholds(path: Option<&str>) -> Result<ThresholdConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let contents = file::read_text(path)?;
            Ok(ThresholdConfig::from_yaml_str(&contents)
                .map_err(|e| format!("Failed to parse thresholds '{}': {}", path, e))?)
        }
        None => Ok(ThresholdConfig::default()),
    }
}
