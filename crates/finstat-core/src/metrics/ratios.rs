//! Profitability, leverage and liquidity ratios.
//!
//! Every formula guards its denominator: a zero denominator yields zero, the
//! same convention the account resolver uses for missing data. `None` is kept
//! for results that cannot be represented (decimal overflow) and is classified
//! as `Danger`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::accounts;
use crate::metrics::health::{classify, HealthStatus, HealthThresholds, Polarity};
use crate::statement::{resolve, LineItem, Period, StatementSection};
use crate::types::{Money, Rate};
use crate::FinstatResult;

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

fn guarded_div(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return Some(Decimal::ZERO);
    }
    numerator.checked_div(denominator)
}

fn guarded_percent(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    guarded_div(numerator, denominator)?.checked_mul(HUNDRED)
}

/// Net income / equity × 100.
pub fn return_on_equity(net_income: Money, equity: Money) -> Option<Rate> {
    guarded_percent(net_income, equity)
}

/// Net income / total assets × 100.
pub fn return_on_assets(net_income: Money, total_assets: Money) -> Option<Rate> {
    guarded_percent(net_income, total_assets)
}

/// Total liabilities / equity × 100.
pub fn debt_ratio(total_debt: Money, equity: Money) -> Option<Rate> {
    guarded_percent(total_debt, equity)
}

/// Current assets / current liabilities, unitless.
pub fn current_ratio(current_assets: Money, current_liabilities: Money) -> Option<Rate> {
    guarded_div(current_assets, current_liabilities)
}

/// Operating income / revenue × 100.
pub fn operating_margin(operating_income: Money, revenue: Money) -> Option<Rate> {
    guarded_percent(operating_income, revenue)
}

/// Net income / revenue × 100.
pub fn net_margin(net_income: Money, revenue: Money) -> Option<Rate> {
    guarded_percent(net_income, revenue)
}

// ---------------------------------------------------------------------------
// Ratio catalogue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioUnit {
    Percent,
    Ratio,
}

impl RatioUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Ratio => "",
        }
    }

    /// Percentages print with one decimal place, multiples with two.
    pub fn format(&self, value: Option<Rate>) -> String {
        match (self, value) {
            (_, None) => "-".to_string(),
            (Self::Percent, Some(v)) => format!("{:.1}{}", v, self.suffix()),
            (Self::Ratio, Some(v)) => format!("{:.2}{}", v, self.suffix()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    ReturnOnEquity,
    ReturnOnAssets,
    DebtRatio,
    CurrentRatio,
    OperatingMargin,
    NetMargin,
}

impl RatioKind {
    /// Presentation order.
    pub const ALL: [RatioKind; 6] = [
        RatioKind::ReturnOnEquity,
        RatioKind::ReturnOnAssets,
        RatioKind::DebtRatio,
        RatioKind::CurrentRatio,
        RatioKind::OperatingMargin,
        RatioKind::NetMargin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ReturnOnEquity => "ROE",
            Self::ReturnOnAssets => "ROA",
            Self::DebtRatio => "Debt Ratio",
            Self::CurrentRatio => "Current Ratio",
            Self::OperatingMargin => "Operating Margin",
            Self::NetMargin => "Net Margin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReturnOnEquity => "ROE",
            Self::ReturnOnAssets => "ROA",
            Self::DebtRatio => "부채비율",
            Self::CurrentRatio => "유동비율",
            Self::OperatingMargin => "영업이익률",
            Self::NetMargin => "순이익률",
        }
    }

    pub fn unit(&self) -> RatioUnit {
        match self {
            Self::CurrentRatio => RatioUnit::Ratio,
            _ => RatioUnit::Percent,
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Self::DebtRatio => Polarity::LowerIsBetter,
            _ => Polarity::HigherIsBetter,
        }
    }

    pub fn default_thresholds(&self) -> HealthThresholds {
        match self {
            Self::ReturnOnEquity => HealthThresholds::new(dec!(15), dec!(10)),
            Self::ReturnOnAssets => HealthThresholds::new(dec!(10), dec!(5)),
            Self::DebtRatio => HealthThresholds::new(dec!(100), dec!(200)),
            Self::CurrentRatio => HealthThresholds::new(dec!(1.5), dec!(1.0)),
            Self::OperatingMargin => HealthThresholds::new(dec!(10), dec!(5)),
            Self::NetMargin => HealthThresholds::new(dec!(10), dec!(5)),
        }
    }
}

// ---------------------------------------------------------------------------
// Threshold configuration
// ---------------------------------------------------------------------------

/// Per-ratio overrides of the health bounds. Unset entries use the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub roe: Option<HealthThresholds>,
    pub roa: Option<HealthThresholds>,
    pub debt_ratio: Option<HealthThresholds>,
    pub current_ratio: Option<HealthThresholds>,
    pub operating_margin: Option<HealthThresholds>,
    pub net_margin: Option<HealthThresholds>,
}

impl ThresholdConfig {
    /// Parse a YAML (or JSON) threshold document.
    pub fn from_yaml_str(contents: &str) -> FinstatResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn thresholds_for(&self, kind: RatioKind) -> HealthThresholds {
        let configured = match kind {
            RatioKind::ReturnOnEquity => self.roe,
            RatioKind::ReturnOnAssets => self.roa,
            RatioKind::DebtRatio => self.debt_ratio,
            RatioKind::CurrentRatio => self.current_ratio,
            RatioKind::OperatingMargin => self.operating_margin,
            RatioKind::NetMargin => self.net_margin,
        };
        configured.unwrap_or_else(|| kind.default_thresholds())
    }
}

// ---------------------------------------------------------------------------
// Ratio suite
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioResult {
    pub kind: RatioKind,
    pub name: String,
    pub label: String,
    pub current_value: Option<Rate>,
    pub prior_value: Option<Rate>,
    /// Current minus prior, in percentage points. `None` when the prior value
    /// is zero or either side is undefined.
    pub change: Option<Rate>,
    pub unit: RatioUnit,
    pub thresholds: HealthThresholds,
    pub polarity: Polarity,
    pub status: HealthStatus,
    /// Current value with its unit, e.g. `20.0%` or `1.50`.
    pub display: String,
    /// Korean badge for `status`.
    pub badge: String,
}

/// Resolved amounts feeding the ratio suite, for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioInputs {
    pub net_income: Money,
    pub equity: Money,
    pub total_assets: Money,
    pub total_debt: Money,
    pub current_assets: Money,
    pub current_liabilities: Money,
    pub operating_income: Money,
    pub revenue: Money,
}

impl RatioInputs {
    pub fn resolve(records: &[LineItem], period: Period) -> Self {
        let bs = Some(StatementSection::BalanceSheet);
        let is = Some(StatementSection::IncomeStatement);
        RatioInputs {
            net_income: resolve(records, accounts::NET_INCOME, period, is),
            equity: resolve(records, accounts::TOTAL_EQUITY, period, bs),
            total_assets: resolve(records, accounts::TOTAL_ASSETS, period, bs),
            total_debt: resolve(records, accounts::TOTAL_LIABILITIES, period, bs),
            current_assets: resolve(records, accounts::CURRENT_ASSETS, period, bs),
            current_liabilities: resolve(records, accounts::CURRENT_LIABILITIES, period, bs),
            operating_income: resolve(records, accounts::OPERATING_INCOME, period, is),
            revenue: resolve(records, accounts::REVENUE, period, is),
        }
    }
}

fn ratio_values(kind: RatioKind, cur: &RatioInputs, prev: &RatioInputs) -> (Option<Rate>, Option<Rate>) {
    // Prior ROA is measured against current total assets, and prior current
    // ratio against current current assets.
    match kind {
        RatioKind::ReturnOnEquity => (
            return_on_equity(cur.net_income, cur.equity),
            return_on_equity(prev.net_income, prev.equity),
        ),
        RatioKind::ReturnOnAssets => (
            return_on_assets(cur.net_income, cur.total_assets),
            return_on_assets(prev.net_income, cur.total_assets),
        ),
        RatioKind::DebtRatio => (
            debt_ratio(cur.total_debt, cur.equity),
            debt_ratio(prev.total_debt, prev.equity),
        ),
        RatioKind::CurrentRatio => (
            current_ratio(cur.current_assets, cur.current_liabilities),
            current_ratio(cur.current_assets, prev.current_liabilities),
        ),
        RatioKind::OperatingMargin => (
            operating_margin(cur.operating_income, cur.revenue),
            operating_margin(prev.operating_income, prev.revenue),
        ),
        RatioKind::NetMargin => (
            net_margin(cur.net_income, cur.revenue),
            net_margin(prev.net_income, prev.revenue),
        ),
    }
}

fn change_between(current: Option<Rate>, prior: Option<Rate>) -> Option<Rate> {
    let (c, p) = (current?, prior?);
    if p.is_zero() {
        return None;
    }
    c.checked_sub(p)
}

/// Build one ratio result from already-resolved inputs.
pub fn build_ratio(
    kind: RatioKind,
    current: &RatioInputs,
    prior: &RatioInputs,
    config: &ThresholdConfig,
) -> RatioResult {
    let (current_value, prior_value) = ratio_values(kind, current, prior);
    let thresholds = config.thresholds_for(kind);
    let polarity = kind.polarity();
    let unit = kind.unit();
    let status = classify(current_value, &thresholds, polarity);

    RatioResult {
        kind,
        name: kind.name().to_string(),
        label: kind.label().to_string(),
        current_value,
        prior_value,
        change: change_between(current_value, prior_value),
        unit,
        thresholds,
        polarity,
        status,
        display: unit.format(current_value),
        badge: status.label().to_string(),
    }
}

/// Compute the six headline ratios for the current and prior period.
pub fn calculate_ratios(records: &[LineItem], config: &ThresholdConfig) -> Vec<RatioResult> {
    let current = RatioInputs::resolve(records, Period::Current);
    let prior = RatioInputs::resolve(records, Period::Prior);
    tracing::debug!(?current, ?prior, "resolved ratio inputs");

    RatioKind::ALL
        .iter()
        .map(|kind| build_ratio(*kind, &current, &prior, config))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
