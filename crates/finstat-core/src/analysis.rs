//! Full statement analysis: key accounts, ratios, growth and asset structure
//! in one computation envelope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::accounts;
use crate::metrics::growth::{calculate_growth, GrowthAnalysis};
use crate::metrics::ratios::{calculate_ratios, RatioInputs, RatioResult, ThresholdConfig};
use crate::metrics::structure::{calculate_asset_structure, AssetStructure};
use crate::statement::{resolve, select, LineItem, Period, StatementSection};
use crate::types::*;
use crate::FinstatResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementAnalysisInput {
    pub records: Vec<LineItem>,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAccount {
    pub name: String,
    pub section: StatementSection,
    pub current: Money,
    pub prior: Money,
    pub prior_prior: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementAnalysis {
    pub record_count: usize,
    pub key_accounts: Vec<KeyAccount>,
    pub ratios: Vec<RatioResult>,
    pub growth: GrowthAnalysis,
    pub asset_structure: AssetStructure,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Headline account values for every key account that has a record.
///
/// Balance-sheet records are searched before income-statement records.
pub fn key_accounts(records: &[LineItem]) -> Vec<KeyAccount> {
    accounts::KEY_ACCOUNTS
        .iter()
        .filter_map(|name| {
            let section = [StatementSection::BalanceSheet, StatementSection::IncomeStatement]
                .into_iter()
                .find(|s| select(records, name, Some(*s)).is_some())?;
            let amount = |period| resolve(records, name, period, Some(section));
            Some(KeyAccount {
                name: name.to_string(),
                section,
                current: amount(Period::Current),
                prior: amount(Period::Prior),
                prior_prior: amount(Period::PriorPrior),
            })
        })
        .collect()
}

/// Run every derived metric over one line-item collection.
pub fn analyze_statements(
    input: &StatementAnalysisInput,
) -> FinstatResult<ComputationOutput<StatementAnalysis>> {
    let start = Instant::now();
    let span = tracing::debug_span!("analyze_statements", records = input.records.len());
    let _guard = span.enter();

    let records = &input.records;
    let warnings = data_warnings(records);

    let output = StatementAnalysis {
        record_count: records.len(),
        key_accounts: key_accounts(records),
        ratios: calculate_ratios(records, &input.thresholds),
        growth: calculate_growth(records),
        asset_structure: calculate_asset_structure(records),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "scope_preference": "consolidated (CFS) over standalone (OFS)",
        "missing_amounts": "treated as zero",
        "zero_denominator_ratio": "reported as zero",
        "zero_base_growth": "undefined (null)",
        "prior_roa_denominator": "current total assets",
        "prior_current_ratio_numerator": "current current assets"
    });

    Ok(ComputationOutput::new(
        output,
        "Financial statement ratio, growth and asset structure analysis",
        assumptions,
        warnings,
        elapsed,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn data_warnings(records: &[LineItem]) -> Vec<String> {
    let mut warnings = Vec::new();
    if records.is_empty() {
        warnings.push("No line items supplied; every metric is reported as zero.".into());
        return warnings;
    }

    let current = RatioInputs::resolve(records, Period::Current);
    if current.revenue.is_zero() {
        warnings.push("Revenue is zero or missing; margins reported as 0.".into());
    }
    if current.equity.is_zero() {
        warnings.push("Total equity is zero or missing; ROE and debt ratio reported as 0.".into());
    }
    if current.total_assets.is_zero() {
        warnings.push("Total assets are zero or missing; ROA reported as 0.".into());
    }
    if current.current_liabilities.is_zero() {
        warnings.push("Current liabilities are zero or missing; current ratio reported as 0.".into());
    }
    if current.equity < Decimal::ZERO {
        warnings.push("Total equity is negative; ROE and debt ratio are not meaningful.".into());
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::StatementScope;
    use rust_decimal_macros::dec;

    fn item(name: &str, section: StatementSection, scope: StatementScope, cur: &str, prev: &str) -> LineItem {
        LineItem::new(name, section, scope).with_amounts(cur, prev)
    }

    #[test]
    fn test_key_accounts_order_and_sections() {
        use StatementScope::*;
        use StatementSection::*;
        let records = vec![
            item("매출액", IncomeStatement, Consolidated, "500", "400"),
            item("자산총계", BalanceSheet, Standalone, "900", "700"),
            item("자산총계", BalanceSheet, Consolidated, "1000", "800"),
        ];
        let rows = key_accounts(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "자산총계");
        assert_eq!(rows[0].current, dec!(1000));
        assert_eq!(rows[0].prior_prior, Decimal::ZERO);
        assert_eq!(rows[1].name, "매출액");
        assert_eq!(rows[1].section, IncomeStatement);
    }

    #[test]
    fn test_analysis_envelope() {
        let input = StatementAnalysisInput {
            records: vec![item(
                "자산총계",
                StatementSection::BalanceSheet,
                StatementScope::Consolidated,
                "1000",
                "800",
            )],
            thresholds: ThresholdConfig::default(),
        };
        let result = analyze_statements(&input).unwrap();
        assert_eq!(result.result.record_count, 1);
        assert_eq!(result.result.ratios.len(), 6);
        assert!(result.warnings.iter().any(|w| w.contains("Revenue")));
        assert_eq!(result.metadata.precision, PRECISION);
        assert!(!result.methodology.is_empty());
    }

    #[test]
    fn test_empty_input_warns_once() {
        let input = StatementAnalysisInput {
            records: Vec::new(),
            thresholds: ThresholdConfig::default(),
        };
        let result = analyze_statements(&input).unwrap();
        assert_eq!(result.warnings.len(), 1);
        assert!(result.result.key_accounts.is_empty());
    }

    #[test]
    fn test_input_deserializes_without_thresholds() {
        let input: StatementAnalysisInput = serde_json::from_str(
            r#"{"records": [{"account_nm": "매출액", "sj_div": "IS", "fs_div": "OFS", "thstrm_amount": "10"}]}"#,
        )
        .unwrap();
        assert_eq!(input.thresholds, ThresholdConfig::default());
        assert_eq!(input.records.len(), 1);
    }
}
