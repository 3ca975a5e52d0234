//! Risk Submission Validation and Scoring

use crate::error::ValidationError;
use crate::level::RiskLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive bounds for likelihood and impact
const RATING_MIN: i64 = 1;
const RATING_MAX: i64 = 5;

/// A client-submitted risk observation, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSubmission {
    /// Asset name, e.g. "Web Server"
    pub asset: String,
    /// Threat description, e.g. "SQL Injection"
    pub threat: String,
    /// Likelihood rating, 1-5
    pub likelihood: i64,
    /// Impact rating, 1-5
    pub impact: i64,
}

/// Outcome of assessing a validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub score: i64,
    pub level: RiskLevel,
}

fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

fn validate_rating(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: RATING_MIN,
            max: RATING_MAX,
        })
    } else {
        Ok(())
    }
}

/// Validate a submission, collecting every violation
pub fn validate(submission: &RiskSubmission) -> Result<(), Vec<ValidationError>> {
    let checks = [
        validate_non_empty("asset", &submission.asset),
        validate_non_empty("threat", &submission.threat),
        validate_rating("likelihood", submission.likelihood),
        validate_rating("impact", submission.impact),
    ];

    let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        debug!("Submission rejected with {} validation error(s)", errors.len());
        Err(errors)
    }
}

/// Compute the risk score for validated ratings
pub fn score(likelihood: i64, impact: i64) -> i64 {
    likelihood * impact
}

/// Validate a submission and compute its score and level
pub fn assess(submission: &RiskSubmission) -> Result<Assessment, Vec<ValidationError>> {
    validate(submission)?;

    let score = score(submission.likelihood, submission.impact);
    let level = RiskLevel::from_score(score);
    debug!(score, level = %level, "Assessed submission for asset {}", submission.asset);

    Ok(Assessment { score, level })
}
