use clap::{Args, ValueEnum};
use serde_json::Value;

use finstat_core::analysis::{self, StatementAnalysisInput};
use finstat_core::metrics::{self, StructureView};

use crate::input;

/// Arguments for the ratio suite and the full analysis
#[derive(Args)]
pub struct RatiosArgs {
    /// Path to JSON input file (line-item array or provider response)
    #[arg(long)]
    pub input: Option<String>,

    /// YAML or JSON file overriding ratio health bounds
    #[arg(long)]
    pub thresholds: Option<String>,
}

/// Arguments for growth analysis
#[derive(Args)]
pub struct GrowthArgs {
    /// Path to JSON input file (line-item array or provider response)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    All,
    Current,
    NonCurrent,
}

impl From<ViewArg> for StructureView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::All => StructureView::All,
            ViewArg::Current => StructureView::Current,
            ViewArg::NonCurrent => StructureView::NonCurrent,
        }
    }
}

/// Arguments for asset structure breakdown
#[derive(Args)]
pub struct StructureArgs {
    /// Path to JSON input file (line-item array or provider response)
    #[arg(long)]
    pub input: Option<String>,

    /// Print only one breakdown instead of the whole structure
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let thresholds = input::load_thresholds(args.thresholds.as_deref())?;
    let ratios = metrics::calculate_ratios(&records, &thresholds);
    Ok(serde_json::to_value(ratios)?)
}

pub fn run_growth(args: GrowthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let growth = metrics::calculate_growth(&records);
    Ok(serde_json::to_value(growth)?)
}

pub fn run_asset_structure(args: StructureArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let structure = metrics::calculate_asset_structure(&records);
    match args.view {
        Some(view) => Ok(serde_json::to_value(structure.view(view.into()))?),
        None => Ok(serde_json::to_value(structure)?),
    }
}

pub fn run_analyze(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let thresholds = input::load_thresholds(args.thresholds.as_deref())?;
    let result = analysis::analyze_statements(&StatementAnalysisInput { records, thresholds })?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_output_includes_period_rows() {
        let path = std::env::temp_dir().join("finstat_growth_rows.json");
        std::fs::write(
            &path,
            r#"[{"account_nm": "매출액", "sj_div": "IS", "fs_div": "CFS",
                 "thstrm_amount": "1200", "frmtrm_amount": "1000", "bfefrmtrm_amount": "800"}]"#,
        )
        .unwrap();

        let value = run_growth(GrowthArgs {
            input: Some(path.to_string_lossy().into_owned()),
        })
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(value["has_prior_prior"], true);
        assert_eq!(value["periods"].as_array().unwrap().len(), 2);
        assert_eq!(value["accounts"].as_array().unwrap().len(), 4);
    }
}
