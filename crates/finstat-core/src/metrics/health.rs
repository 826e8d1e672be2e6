use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative health bucket for a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Good,
    Warning,
    Danger,
}

impl HealthStatus {
    /// Korean badge text shown next to a ratio.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "양호",
            Self::Warning => "보통",
            Self::Danger => "주의",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        };
        write!(f, "{}", s)
    }
}

/// Direction in which a ratio improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Threshold pair used for classification.
///
/// For `HigherIsBetter` ratios `good >= warning`; for `LowerIsBetter` ratios
/// `good <= warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthThresholds {
    pub good: Decimal,
    pub warning: Decimal,
}

impl HealthThresholds {
    pub fn new(good: Decimal, warning: Decimal) -> Self {
        HealthThresholds { good, warning }
    }
}

/// Classify `value` against `thresholds`.
///
/// An undefined value (`None`) is always `Danger`.
pub fn classify(
    value: Option<Decimal>,
    thresholds: &HealthThresholds,
    polarity: Polarity,
) -> HealthStatus {
    let Some(v) = value else {
        return HealthStatus::Danger;
    };

    match polarity {
        Polarity::HigherIsBetter => {
            if v >= thresholds.good {
                HealthStatus::Good
            } else if v >= thresholds.warning {
                HealthStatus::Warning
            } else {
                HealthStatus::Danger
            }
        }
        Polarity::LowerIsBetter => {
            if v <= thresholds.good {
                HealthStatus::Good
            } else if v <= thresholds.warning {
                HealthStatus::Warning
            } else {
                HealthStatus::Danger
            }
        }
    }
}
