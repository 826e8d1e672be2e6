//! Line-item records as delivered by the disclosure provider.
//!
//! Field names follow the Rust convention but every field also accepts the
//! provider's wire name (`account_nm`, `sj_div`, `fs_div`, `thstrm_amount`,
//! ...), so a raw provider list deserializes directly into `Vec<LineItem>`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::Money;
use crate::FinstatError;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Which statement a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementSection {
    #[serde(rename = "BS", alias = "BalanceSheet")]
    BalanceSheet,
    #[serde(rename = "IS", alias = "IncomeStatement")]
    IncomeStatement,
}

impl StatementSection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "BS",
            Self::IncomeStatement => "IS",
        }
    }
}

impl fmt::Display for StatementSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for StatementSection {
    type Err = FinstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BS" | "bs" | "balance-sheet" | "BalanceSheet" => Ok(Self::BalanceSheet),
            "IS" | "is" | "income-statement" | "IncomeStatement" => Ok(Self::IncomeStatement),
            other => Err(FinstatError::InvalidInput {
                field: "statement_section".into(),
                reason: format!("Unknown statement section '{other}' (expected BS or IS)."),
            }),
        }
    }
}

/// Whether a figure aggregates subsidiaries or covers the legal entity alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementScope {
    #[serde(rename = "CFS", alias = "Consolidated")]
    Consolidated,
    #[serde(rename = "OFS", alias = "Standalone")]
    Standalone,
}

/// Reporting period relative to the requested fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    #[serde(alias = "thstrm")]
    Current,
    #[serde(alias = "frmtrm")]
    Prior,
    #[serde(alias = "bfefrmtrm")]
    PriorPrior,
}

impl Period {
    /// Korean label used in rendered summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "당기",
            Self::Prior => "전기",
            Self::PriorPrior => "전전기",
        }
    }
}

impl FromStr for Period {
    type Err = FinstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" | "thstrm" => Ok(Self::Current),
            "prior" | "frmtrm" => Ok(Self::Prior),
            "prior-prior" | "prior_prior" | "bfefrmtrm" => Ok(Self::PriorPrior),
            other => Err(FinstatError::InvalidInput {
                field: "period".into(),
                reason: format!(
                    "Unknown period '{other}' (expected current, prior or prior-prior)."
                ),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Line item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(alias = "account_nm")]
    pub account_name: String,
    #[serde(alias = "sj_div")]
    pub statement_section: StatementSection,
    #[serde(alias = "fs_div")]
    pub statement_scope: StatementScope,
    #[serde(default, alias = "thstrm_amount")]
    pub current_amount: Option<String>,
    #[serde(default, alias = "frmtrm_amount")]
    pub prior_amount: Option<String>,
    #[serde(default, alias = "bfefrmtrm_amount")]
    pub prior_prior_amount: Option<String>,
    #[serde(default, alias = "sj_nm", skip_serializing_if = "Option::is_none")]
    pub statement_name: Option<String>,
    #[serde(default, alias = "thstrm_nm", skip_serializing_if = "Option::is_none")]
    pub current_period_name: Option<String>,
    #[serde(default, alias = "frmtrm_nm", skip_serializing_if = "Option::is_none")]
    pub prior_period_name: Option<String>,
    #[serde(default, alias = "bfefrmtrm_nm", skip_serializing_if = "Option::is_none")]
    pub prior_prior_period_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl LineItem {
    pub fn new(
        account_name: impl Into<String>,
        statement_section: StatementSection,
        statement_scope: StatementScope,
    ) -> Self {
        LineItem {
            account_name: account_name.into(),
            statement_section,
            statement_scope,
            current_amount: None,
            prior_amount: None,
            prior_prior_amount: None,
            statement_name: None,
            current_period_name: None,
            prior_period_name: None,
            prior_prior_period_name: None,
            currency: None,
        }
    }

    pub fn with_amounts(mut self, current: &str, prior: &str) -> Self {
        self.current_amount = Some(current.to_string());
        self.prior_amount = Some(prior.to_string());
        self
    }

    pub fn with_prior_prior(mut self, amount: &str) -> Self {
        self.prior_prior_amount = Some(amount.to_string());
        self
    }

    /// Raw amount string for `period`, treating an empty string as absent.
    pub fn raw_amount(&self, period: Period) -> Option<&str> {
        let raw = match period {
            Period::Current => self.current_amount.as_deref(),
            Period::Prior => self.prior_amount.as_deref(),
            Period::PriorPrior => self.prior_prior_amount.as_deref(),
        };
        raw.filter(|s| !s.trim().is_empty())
    }

    /// Parsed amount for `period`; `None` when absent or unparsable.
    pub fn amount(&self, period: Period) -> Option<Money> {
        let raw = self.raw_amount(period)?;
        let parsed = parse_amount(raw);
        if parsed.is_none() {
            tracing::warn!(
                account = %self.account_name,
                ?period,
                raw,
                "unparsable amount treated as missing"
            );
        }
        parsed
    }
}

/// Parse a provider amount string as a base-10 integer.
///
/// Reads an optional sign followed by the leading ASCII digits, stopping at the
/// first non-digit character. Returns `None` when no digit is present or the
/// value does not fit in an `i64`.
pub fn parse_amount(raw: &str) -> Option<Money> {
    let s = raw.trim();
    let sign_len = match s.as_bytes().first() {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    let value: i64 = s[..sign_len + digits].parse().ok()?;
    Some(Decimal::from(value))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_amount("1000"), Some(dec!(1000)));
        assert_eq!(parse_amount("  42 "), Some(dec!(42)));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_amount("-3500"), Some(dec!(-3500)));
        assert_eq!(parse_amount("+12"), Some(dec!(12)));
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(parse_amount("12.75"), Some(dec!(12)));
        assert_eq!(parse_amount("1,000"), Some(dec!(1)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("n/a"), None);
        assert_eq!(parse_amount("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_full_i64_range() {
        assert_eq!(parse_amount("-9223372036854775808"), Some(Decimal::from(i64::MIN)));
        assert_eq!(parse_amount("9223372036854775807"), Some(Decimal::from(i64::MAX)));
        assert_eq!(parse_amount("9223372036854775808"), None);
        assert_eq!(parse_amount("-9223372036854775809"), None);
    }

    #[test]
    fn test_empty_amount_is_absent() {
        let item = LineItem::new(
            "매출액",
            StatementSection::IncomeStatement,
            StatementScope::Consolidated,
        )
        .with_amounts("", "500");
        assert_eq!(item.raw_amount(Period::Current), None);
        assert_eq!(item.amount(Period::Current), None);
        assert_eq!(item.amount(Period::Prior), Some(dec!(500)));
        assert_eq!(item.amount(Period::PriorPrior), None);
    }

    #[test]
    fn test_deserialize_provider_fields() {
        let json = r#"{
            "rcept_no": "20240312000736",
            "account_nm": "자산총계",
            "sj_div": "BS",
            "sj_nm": "재무상태표",
            "fs_div": "CFS",
            "thstrm_nm": "제 55 기",
            "thstrm_amount": "1000",
            "frmtrm_amount": "800",
            "ord": "1",
            "currency": "KRW"
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.account_name, "자산총계");
        assert_eq!(item.statement_section, StatementSection::BalanceSheet);
        assert_eq!(item.statement_scope, StatementScope::Consolidated);
        assert_eq!(item.amount(Period::Current), Some(dec!(1000)));
        assert_eq!(item.prior_prior_amount, None);
        assert_eq!(item.statement_name.as_deref(), Some("재무상태표"));
        assert_eq!(item.currency.as_deref(), Some("KRW"));
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        let json = r#"{"account_nm": "자산총계", "sj_div": "BS", "fs_div": "XYZ"}"#;
        assert!(serde_json::from_str::<LineItem>(json).is_err());
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("thstrm".parse::<Period>().unwrap(), Period::Current);
        assert_eq!("prior".parse::<Period>().unwrap(), Period::Prior);
        assert_eq!("prior-prior".parse::<Period>().unwrap(), Period::PriorPrior);
        assert!("next".parse::<Period>().is_err());
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!(
            "BS".parse::<StatementSection>().unwrap(),
            StatementSection::BalanceSheet
        );
        assert_eq!(
            "income-statement".parse::<StatementSection>().unwrap(),
            StatementSection::IncomeStatement
        );
        assert!("CF".parse::<StatementSection>().is_err());
    }
}
