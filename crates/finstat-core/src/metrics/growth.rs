//! Year-over-year growth of headline accounts.
//!
//! A zero base makes growth undefined (`None`), not zero. The earlier
//! prior-prior → prior rate additionally requires a strictly positive base.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::accounts;
use crate::statement::{resolve, LineItem, Period, StatementSection};
use crate::types::{Money, Rate};

/// Percentage change from `previous` to `current`; `None` when `previous` is zero
/// or the change is not representable.
pub fn growth_rate(current: Money, previous: Money) -> Option<Rate> {
    if previous.is_zero() {
        return None;
    }
    current
        .checked_sub(previous)?
        .checked_div(previous)?
        .checked_mul(dec!(100))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountGrowth {
    pub account: String,
    pub label: String,
    pub current: Money,
    pub prior: Money,
    pub prior_prior: Money,
    pub prior_to_current: Option<Rate>,
    pub prior_prior_to_prior: Option<Rate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub label: String,
    pub rate: Option<Rate>,
}

/// One row of the growth chart: a period transition with a rate per account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPeriod {
    pub period: String,
    pub from: Period,
    pub to: Period,
    pub rates: Vec<GrowthPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthAnalysis {
    pub accounts: Vec<AccountGrowth>,
    /// Any tracked account reports a positive prior-prior amount.
    pub has_prior_prior: bool,
    /// Chronological: prior-prior → prior (when available), then prior → current.
    pub periods: Vec<GrowthPeriod>,
}

impl GrowthAnalysis {
    pub fn account(&self, name: &str) -> Option<&AccountGrowth> {
        self.accounts.iter().find(|a| a.account == name)
    }
}

fn section_for(account: &str) -> StatementSection {
    if account == accounts::TOTAL_ASSETS {
        StatementSection::BalanceSheet
    } else {
        StatementSection::IncomeStatement
    }
}

fn account_growth(records: &[LineItem], account: &str, label: &str) -> AccountGrowth {
    let section = Some(section_for(account));
    let current = resolve(records, account, Period::Current, section);
    let prior = resolve(records, account, Period::Prior, section);
    let prior_prior = resolve(records, account, Period::PriorPrior, section);

    let prior_prior_to_prior = if prior_prior > Decimal::ZERO {
        growth_rate(prior, prior_prior)
    } else {
        None
    };

    AccountGrowth {
        account: account.to_string(),
        label: label.to_string(),
        current,
        prior,
        prior_prior,
        prior_to_current: growth_rate(current, prior),
        prior_prior_to_prior,
    }
}

/// Growth of revenue, operating income, net income and total assets.
pub fn calculate_growth(records: &[LineItem]) -> GrowthAnalysis {
    let tracked: Vec<AccountGrowth> = accounts::GROWTH_ACCOUNTS
        .iter()
        .map(|(account, label)| account_growth(records, account, label))
        .collect();

    let has_prior_prior = tracked.iter().any(|a| a.prior_prior > Decimal::ZERO);

    let mut periods = Vec::with_capacity(2);

    // The earlier row is keyed on revenue having a usable base.
    let revenue_has_base = tracked
        .iter()
        .find(|a| a.account == accounts::REVENUE)
        .is_some_and(|a| a.prior_prior_to_prior.is_some());
    if has_prior_prior && revenue_has_base {
        periods.push(GrowthPeriod {
            period: "전전기→전기".to_string(),
            from: Period::PriorPrior,
            to: Period::Prior,
            rates: tracked
                .iter()
                .map(|a| GrowthPoint {
                    label: a.label.clone(),
                    rate: a.prior_prior_to_prior,
                })
                .collect(),
        });
    }

    periods.push(GrowthPeriod {
        period: "전기→당기".to_string(),
        from: Period::Prior,
        to: Period::Current,
        rates: tracked
            .iter()
            .map(|a| GrowthPoint {
                label: a.label.clone(),
                rate: a.prior_to_current,
            })
            .collect(),
    });

    GrowthAnalysis {
        accounts: tracked,
        has_prior_prior,
        periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::StatementScope;

    fn is_item(name: &str, current: &str, prior: &str, prior_prior: &str) -> LineItem {
        LineItem::new(name, StatementSection::IncomeStatement, StatementScope::Consolidated)
            .with_amounts(current, prior)
            .with_prior_prior(prior_prior)
    }

    #[test]
    fn test_growth_rate_basic() {
        assert_eq!(growth_rate(dec!(1000), dec!(800)), Some(dec!(25)));
        assert_eq!(growth_rate(dec!(600), dec!(800)), Some(dec!(-25)));
    }

    #[test]
    fn test_growth_identity() {
        for x in [dec!(1), dec!(-40), dec!(123456789)] {
            assert_eq!(growth_rate(x, x), Some(Decimal::ZERO));
        }
    }

    #[test]
    fn test_zero_base_is_undefined() {
        assert_eq!(growth_rate(dec!(500), Decimal::ZERO), None);
        assert_eq!(growth_rate(Decimal::ZERO, Decimal::ZERO), None);
    }

    #[test]
    fn test_unrepresentable_change_is_undefined() {
        assert_eq!(growth_rate(Decimal::MAX, dec!(-1)), None);
        assert_eq!(growth_rate(Decimal::MIN, dec!(1)), None);
        assert_eq!(growth_rate(Decimal::MAX, dec!(1)), None);
        assert_eq!(growth_rate(Decimal::MAX, Decimal::MAX), Some(Decimal::ZERO));
    }

    #[test]
    fn test_negative_base_follows_formula() {
        // (50 - (-100)) / -100 * 100 = -150
        assert_eq!(growth_rate(dec!(50), dec!(-100)), Some(dec!(-150)));
    }

    #[test]
    fn test_three_period_analysis() {
        let records = vec![
            is_item("매출액", "1200", "1000", "800"),
            is_item("영업이익", "100", "120", "0"),
        ];
        let analysis = calculate_growth(&records);

        let revenue = analysis.account("매출액").unwrap();
        assert_eq!(revenue.prior_to_current, Some(dec!(20)));
        assert_eq!(revenue.prior_prior_to_prior, Some(dec!(25)));

        let op = analysis.account("영업이익").unwrap();
        assert_eq!(op.prior_prior_to_prior, None);

        assert!(analysis.has_prior_prior);
        assert_eq!(analysis.periods.len(), 2);
        assert_eq!(analysis.periods[0].from, Period::PriorPrior);
        assert_eq!(analysis.periods[1].to, Period::Current);
        assert_eq!(analysis.periods[0].rates.len(), 4);
    }

    #[test]
    fn test_negative_prior_prior_base_is_undefined() {
        let records = vec![is_item("매출액", "100", "50", "-20")];
        let revenue = calculate_growth(&records);
        let revenue = revenue.account("매출액").unwrap();
        assert_eq!(revenue.prior_prior_to_prior, None);
    }

    #[test]
    fn test_two_period_analysis() {
        let records = vec![LineItem::new(
            "자산총계",
            StatementSection::BalanceSheet,
            StatementScope::Consolidated,
        )
        .with_amounts("1000", "800")];
        let analysis = calculate_growth(&records);
        assert!(!analysis.has_prior_prior);
        assert_eq!(analysis.periods.len(), 1);
        let assets = analysis.account("자산총계").unwrap();
        assert_eq!(assets.prior_to_current, Some(dec!(25)));
        // Revenue missing entirely: no base, no growth.
        assert_eq!(analysis.account("매출액").unwrap().prior_to_current, None);
    }
}
