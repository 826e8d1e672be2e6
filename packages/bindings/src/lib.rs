use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use finstat_core::analysis::{self, StatementAnalysisInput};
use finstat_core::metrics::{self, StructureView, ThresholdConfig};
use finstat_core::source::parse_provider_response;
use finstat_core::statement::{self, LineItem, Period, StatementSection};
use finstat_core::summary;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Accepts a bare line-item array or a provider response envelope.
fn parse_records(records_json: &str) -> NapiResult<Vec<LineItem>> {
    let value: serde_json::Value = serde_json::from_str(records_json).map_err(to_napi_error)?;
    parse_provider_response(value).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Account resolution
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ResolveQuery {
    account_name: String,
    #[serde(default)]
    period: Period,
    #[serde(default)]
    section: Option<StatementSection>,
}

/// Returns the resolved amount as a decimal string.
#[napi]
pub fn resolve_account(records_json: String, query_json: String) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let query: ResolveQuery = serde_json::from_str(&query_json).map_err(to_napi_error)?;
    let amount = statement::resolve(&records, &query.account_name, query.period, query.section);
    Ok(amount.to_string())
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[napi]
pub fn financial_ratios(records_json: String, thresholds_json: Option<String>) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let thresholds = match thresholds_json {
        Some(doc) => ThresholdConfig::from_yaml_str(&doc).map_err(to_napi_error)?,
        None => ThresholdConfig::default(),
    };
    let output = metrics::calculate_ratios(&records, &thresholds);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn growth_rates(records_json: String) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let output = metrics::calculate_growth(&records);
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// `view` is one of `all`, `current`, `non_current`; omitted returns everything.
#[napi]
pub fn asset_structure(records_json: String, view: Option<String>) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let structure = metrics::calculate_asset_structure(&records);
    match view {
        Some(view) => {
            let view: StructureView =
                serde_json::from_value(serde_json::Value::String(view)).map_err(to_napi_error)?;
            serde_json::to_string(structure.view(view)).map_err(to_napi_error)
        }
        None => serde_json::to_string(&structure).map_err(to_napi_error),
    }
}

// ---------------------------------------------------------------------------
// Full analysis and summarizer input
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze(input_json: String) -> NapiResult<String> {
    let input: StatementAnalysisInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analysis::analyze_statements(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summary_text(records_json: String, limit: Option<u32>) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let limit = limit.map_or(summary::DEFAULT_SUMMARY_LIMIT, |l| l as usize);
    Ok(summary::render_summary(&records, limit))
}
