pub mod growth;
pub mod health;
pub mod ratios;
pub mod structure;

pub use growth::{calculate_growth, growth_rate, GrowthAnalysis};
pub use health::{classify, HealthStatus, HealthThresholds, Polarity};
pub use ratios::{calculate_ratios, RatioKind, RatioResult, RatioUnit, ThresholdConfig};
pub use structure::{breakdown, calculate_asset_structure, AssetStructure, StructureComponent, StructureView};
