//! Boundary with the statement-fetching collaborator.
//!
//! The network client that talks to the disclosure provider lives outside this
//! crate. This module defines what it is asked for ([`StatementRequest`]), how
//! its raw response envelope is decoded ([`parse_provider_response`]) and the
//! trait it implements ([`StatementSource`]).

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::statement::LineItem;
use crate::{FinstatError, FinstatResult};

/// Provider status for a successful response.
pub const STATUS_OK: &str = "000";
/// Provider status when no statements exist for the request.
pub const STATUS_NO_DATA: &str = "013";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportCode {
    #[default]
    #[serde(rename = "11011")]
    Annual,
    #[serde(rename = "11012")]
    HalfYear,
    #[serde(rename = "11013")]
    FirstQuarter,
    #[serde(rename = "11014")]
    ThirdQuarter,
}

impl ReportCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Annual => "11011",
            Self::HalfYear => "11012",
            Self::FirstQuarter => "11013",
            Self::ThirdQuarter => "11014",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Annual => "사업보고서",
            Self::HalfYear => "반기보고서",
            Self::FirstQuarter => "1분기보고서",
            Self::ThirdQuarter => "3분기보고서",
        }
    }
}

impl FromStr for ReportCode {
    type Err = FinstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "11011" | "annual" => Ok(Self::Annual),
            "11012" | "half-year" => Ok(Self::HalfYear),
            "11013" | "q1" => Ok(Self::FirstQuarter),
            "11014" | "q3" => Ok(Self::ThirdQuarter),
            other => Err(FinstatError::InvalidInput {
                field: "report_code".into(),
                reason: format!("Unknown report code '{other}'."),
            }),
        }
    }
}

/// What to fetch: an opaque company identifier, fiscal year and report type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatementRequest {
    pub corp_code: String,
    pub business_year: i32,
    #[serde(default)]
    pub report_code: ReportCode,
}

impl StatementRequest {
    /// Annual report for the previous calendar year, which is the latest year
    /// the provider reliably has data for.
    pub fn latest_annual(corp_code: impl Into<String>) -> Self {
        StatementRequest {
            corp_code: corp_code.into(),
            business_year: chrono::Local::now().year() - 1,
            report_code: ReportCode::Annual,
        }
    }

    pub fn validate(&self) -> FinstatResult<()> {
        if self.corp_code.trim().is_empty() {
            return Err(FinstatError::InvalidInput {
                field: "corp_code".into(),
                reason: "corp_code is required.".into(),
            });
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!("연도: {}, 보고서: {}", self.business_year, self.report_code.label())
    }
}

// ---------------------------------------------------------------------------
// Provider envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub list: Vec<LineItem>,
}

impl ProviderResponse {
    /// Unwrap the records, turning a non-success status into an error.
    pub fn into_records(self, request: Option<&StatementRequest>) -> FinstatResult<Vec<LineItem>> {
        match self.status.as_str() {
            STATUS_OK => Ok(self.list),
            STATUS_NO_DATA => {
                tracing::debug!(message = %self.message, "provider reported no data");
                Ok(Vec::new())
            }
            _ => Err(FinstatError::ProviderStatus {
                status: self.status,
                message: self.message,
                report: request.map(StatementRequest::describe).unwrap_or_default(),
            }),
        }
    }
}

/// Decode either a provider envelope or a bare array of line items.
pub fn parse_provider_response(value: serde_json::Value) -> FinstatResult<Vec<LineItem>> {
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    let response: ProviderResponse = serde_json::from_value(value)?;
    response.into_records(None)
}

// ---------------------------------------------------------------------------
// Collaborator trait
// ---------------------------------------------------------------------------

/// Supplies a fully materialized line-item collection for a request.
pub trait StatementSource {
    fn fetch(&self, request: &StatementRequest) -> FinstatResult<Vec<LineItem>>;
}

/// In-memory source keyed by request. Unknown requests yield no records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    statements: HashMap<StatementRequest, Vec<LineItem>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, request: StatementRequest, records: Vec<LineItem>) {
        self.statements.insert(request, records);
    }
}

impl StatementSource for StaticSource {
    fn fetch(&self, request: &StatementRequest) -> FinstatResult<Vec<LineItem>> {
        request.validate()?;
        Ok(self.statements.get(request).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_list() -> serde_json::Value {
        json!([
            {"account_nm": "자산총계", "sj_div": "BS", "fs_div": "CFS",
             "thstrm_amount": "1000", "frmtrm_amount": "800"}
        ])
    }

    #[test]
    fn test_parse_bare_array() {
        let records = parse_provider_response(sample_list()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_envelope_ok() {
        let value = json!({"status": "000", "message": "정상", "list": sample_list()});
        let records = parse_provider_response(value).unwrap();
        assert_eq!(records[0].account_name, "자산총계");
    }

    #[test]
    fn test_parse_envelope_no_data() {
        let value = json!({"status": "013", "message": "조회된 데이타가 없습니다."});
        assert!(parse_provider_response(value).unwrap().is_empty());
    }

    #[test]
    fn test_parse_envelope_error_status() {
        let value = json!({"status": "020", "message": "요청 제한을 초과하였습니다."});
        match parse_provider_response(value).unwrap_err() {
            FinstatError::ProviderStatus { status, .. } => assert_eq!(status, "020"),
            other => panic!("Expected ProviderStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_error_carries_report_label() {
        let request = StatementRequest {
            corp_code: "00126380".into(),
            business_year: 2023,
            report_code: ReportCode::HalfYear,
        };
        let response = ProviderResponse {
            status: "100".into(),
            message: "필드의 부적절한 값입니다.".into(),
            list: Vec::new(),
        };
        let err = response.into_records(Some(&request)).unwrap_err();
        assert!(err.to_string().contains("반기보고서"));
    }

    #[test]
    fn test_malformed_shape_is_error() {
        let value = json!([{"account_nm": "자산총계"}]);
        assert!(matches!(
            parse_provider_response(value),
            Err(FinstatError::SerializationError(_))
        ));
    }

    #[test]
    fn test_report_code_round_trip_labels() {
        assert_eq!("11013".parse::<ReportCode>().unwrap(), ReportCode::FirstQuarter);
        assert_eq!(ReportCode::default().code(), "11011");
        assert_eq!(ReportCode::ThirdQuarter.label(), "3분기보고서");
    }

    #[test]
    fn test_static_source() {
        let request = StatementRequest::latest_annual("00126380");
        let mut source = StaticSource::new();
        source.insert(
            request.clone(),
            parse_provider_response(sample_list()).unwrap(),
        );
        assert_eq!(source.fetch(&request).unwrap().len(), 1);

        let other = StatementRequest::latest_annual("00164779");
        assert!(source.fetch(&other).unwrap().is_empty());

        let blank = StatementRequest::latest_annual("  ");
        assert!(source.fetch(&blank).is_err());
    }
}
