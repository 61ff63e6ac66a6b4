pub mod compare;
pub mod error;
pub mod payment;
pub mod scenarios;
pub mod tables;
pub mod types;

pub use error::NovatedError;
pub use types::*;

/// Standard result type for all novated-core operations
pub type NovatedResult<T> = Result<T, NovatedError>;
