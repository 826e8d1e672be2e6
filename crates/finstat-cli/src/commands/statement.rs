use clap::Args;
use serde_json::{json, Value};

use finstat_core::{accounts, analysis};
use finstat_core::statement::{self, Period, StatementSection};
use finstat_core::summary::{self, DEFAULT_SUMMARY_LIMIT};

use crate::input;

/// Arguments for resolving a single account amount
#[derive(Args)]
pub struct ResolveArgs {
    /// Path to JSON input file (line-item array or provider response)
    #[arg(long)]
    pub input: Option<String>,

    /// Exact account name, e.g. 자산총계
    #[arg(long)]
    pub account: String,

    /// Reporting period: current, prior or prior-prior
    #[arg(long, default_value = "current")]
    pub period: Period,

    /// Statement section: BS or IS (any section when omitted)
    #[arg(long)]
    pub section: Option<StatementSection>,
}

/// Arguments for commands that only need line items
#[derive(Args)]
pub struct RecordsArgs {
    /// Path to JSON input file (line-item array or provider response)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the summarizer text rendering
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to JSON input file (line-item array or provider response)
    #[arg(long)]
    pub input: Option<String>,

    /// Maximum number of line items to render
    #[arg(long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
    pub limit: usize,
}

pub fn run_resolve(args: ResolveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let selected = statement::select(&records, &args.account, args.section);
    let amount = statement::resolve(&records, &args.account, args.period, args.section);
    let recognized = accounts::is_recognized(&args.account);

    Ok(json!({
        "account": args.account,
        "period": args.period,
        "section": args.section,
        "amount": amount,
        "found": selected.is_some(),
        "recognized": recognized,
        "scope": selected.map(|item| item.statement_scope),
    }))
}

pub fn run_key_accounts(args: RecordsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    Ok(serde_json::to_value(analysis::key_accounts(&records))?)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let text = summary::render_summary(&records, args.limit);
    Ok(json!({
        "lines": text.lines().count(),
        "summary": text,
    }))
}
