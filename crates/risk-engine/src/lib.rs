//! Risk Assessment Engine
//!
//! Provides input validation, score computation, and severity bucketing
//! for risk observations. Pure computation, no I/O.

mod assess;
mod error;
mod level;

pub use assess::{assess, validate, Assessment, RiskSubmission};
pub use error::ValidationError;
pub use level::RiskLevel;
