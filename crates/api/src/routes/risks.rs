//! Risk Routes

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;
use risk_engine::{assess, RiskSubmission};
use storage::{NewRisk, RiskRecord};

/// Query parameters for the risks listing endpoint
#[derive(Debug, Deserialize)]
pub struct RiskQuery {
    /// Filter by level (Low, Medium, High, Critical); case-sensitive exact match
    pub level: Option<String>,
}

/// Assess a submitted risk and persist the resulting record
pub async fn create_risk(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<RiskSubmission>,
) -> Result<(StatusCode, Json<RiskRecord>), ApiError> {
    let assessment = assess(&submission)?;

    let risk = NewRisk {
        asset: submission.asset,
        threat: submission.threat,
        likelihood: submission.likelihood,
        impact: submission.impact,
        score: assessment.score,
        level: assessment.level.to_string(),
    };
    let id = state.repository.insert(&risk).await?;

    info!(
        "Created risk {} for asset {:?} with level {}",
        id, risk.asset, risk.level
    );

    let record = RiskRecord {
        id,
        asset: risk.asset,
        threat: risk.threat,
        likelihood: risk.likelihood,
        impact: risk.impact,
        score: risk.score,
        level: risk.level,
    };
    Ok((StatusCode::CREATED, Json(record)))
}

/// List persisted risks, newest first, optionally filtered by level
pub async fn list_risks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RiskQuery>,
) -> Result<Json<Vec<RiskRecord>>, ApiError> {
    let records = state.repository.list(params.level.as_deref()).await?;
    Ok(Json(records))
}
