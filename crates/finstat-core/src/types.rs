use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amounts in the reporting currency unit. Decimal, never f64.
pub type Money = Decimal;

/// Ratios and growth rates. Percent-unit values are expressed as percentages
/// (25 = 25%), ratio-unit values as plain multiples (1.5 = 1.5x).
pub type Rate = Decimal;

/// Arithmetic precision reported in every envelope.
pub const PRECISION: &str = "rust_decimal_128bit";

/// Result envelope for analyses that carry methodology and data warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

impl<T: Serialize> ComputationOutput<T> {
    pub fn new(
        result: T,
        methodology: &str,
        assumptions: serde_json::Value,
        warnings: Vec<String>,
        elapsed_us: u64,
    ) -> Self {
        ComputationOutput {
            result,
            methodology: methodology.to_string(),
            assumptions,
            warnings,
            metadata: ComputationMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                computation_time_us: elapsed_us,
                precision: PRECISION.to_string(),
            },
        }
    }
}
