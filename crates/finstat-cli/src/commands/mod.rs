pub mod metrics;
pub mod statement;
