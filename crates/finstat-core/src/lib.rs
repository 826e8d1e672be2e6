pub mod accounts;
pub mod analysis;
pub mod error;
pub mod metrics;
pub mod source;
pub mod statement;
pub mod summary;
pub mod types;

pub use error::FinstatError;
pub use types::*;

/// Standard result type for all finstat operations
pub type FinstatResult<T> = Result<T, FinstatError>;
