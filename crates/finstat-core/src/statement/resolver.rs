//! Authoritative account selection.
//!
//! When the provider discloses the same account more than once, consolidated
//! figures take priority over standalone ones. Within a scope the original
//! record order decides.

use crate::statement::line_item::{LineItem, Period, StatementScope, StatementSection};
use crate::types::Money;
use rust_decimal::Decimal;

/// Select the authoritative record for `account_name`.
///
/// Candidates are matched exactly (case-sensitive) on account name and, when
/// given, on statement section. They are then stably partitioned by scope so
/// that every consolidated record precedes every standalone record, and the
/// first candidate is returned.
pub fn select<'a>(
    records: &'a [LineItem],
    account_name: &str,
    section: Option<StatementSection>,
) -> Option<&'a LineItem> {
    let (consolidated, standalone): (Vec<&LineItem>, Vec<&LineItem>) = records
        .iter()
        .filter(|item| item.account_name == account_name)
        .filter(|item| section.map_or(true, |s| item.statement_section == s))
        .partition(|item| item.statement_scope == StatementScope::Consolidated);

    if consolidated.is_empty() && !standalone.is_empty() {
        tracing::debug!(account = account_name, "no consolidated record, using standalone");
    }

    consolidated.into_iter().chain(standalone).next()
}

/// Resolve an amount, keeping "missing" distinct from a reported value.
pub fn resolve_opt(
    records: &[LineItem],
    account_name: &str,
    period: Period,
    section: Option<StatementSection>,
) -> Option<Money> {
    select(records, account_name, section)?.amount(period)
}

/// Resolve an amount, collapsing missing or unparsable data to zero.
pub fn resolve(
    records: &[LineItem],
    account_name: &str,
    period: Period,
    section: Option<StatementSection>,
) -> Money {
    match resolve_opt(records, account_name, period, section) {
        Some(amount) => amount,
        None => {
            tracing::debug!(account = account_name, ?period, "account missing, resolved to zero");
            Decimal::ZERO
        }
    }
}
