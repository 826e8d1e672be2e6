//! Flattened text rendering handed to the natural-language summarizer.

use crate::statement::{LineItem, Period};
use crate::FinstatResult;

/// Maximum number of line items rendered for the summarizer by default.
pub const DEFAULT_SUMMARY_LIMIT: usize = 30;

fn render_line(item: &LineItem) -> String {
    let statement = item
        .statement_name
        .as_deref()
        .unwrap_or_else(|| item.statement_section.code());
    format!(
        "{} ({}): {} {}, {} {}",
        item.account_name,
        statement,
        Period::Current.label(),
        item.raw_amount(Period::Current).unwrap_or("0"),
        Period::Prior.label(),
        item.raw_amount(Period::Prior).unwrap_or("0"),
    )
}

/// Render the first `limit` records, one per line, in original order.
pub fn render_summary(records: &[LineItem], limit: usize) -> String {
    records
        .iter()
        .take(limit)
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns a rendered statement summary into prose.
pub trait Summarizer {
    fn summarize(&self, company_name: Option<&str>, financial_summary: &str) -> FinstatResult<String>;
}
