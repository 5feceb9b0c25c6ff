use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::risk;
use crate::sms::{DispatchReceipt, SmsGateway};
use crate::store::StoreClient;

/// Application state shared across handlers
pub struct AppState {
    pub store: StoreClient,
    pub sms: SmsGateway,
}

// ============================================================================
// Root & Health
// ============================================================================

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Floodwatch backend is running",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================================
// Alert Feed
// ============================================================================

#[derive(Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<serde_json::Value>,
    pub count: usize,
}

/// Read the full alert feed from the hosted store, unfiltered
pub async fn get_alerts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AlertsResponse>, ApiError> {
    let alerts = state
        .store
        .fetch_all()
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

    Ok(Json(AlertsResponse {
        count: alerts.len(),
        alerts,
    }))
}

// ============================================================================
// SMS Dispatch
// ============================================================================

#[derive(Deserialize)]
pub struct SendAlertParams {
    pub phone: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct SendAlertResponse {
    pub status: &'static str,
    pub sent_at: String,
    pub response: DispatchReceipt,
}

/// Forward one SMS notification to the gateway
pub async fn send_alert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SendAlertParams>,
) -> Result<Json<SendAlertResponse>, ApiError> {
    tracing::info!(phone = %params.phone, "Dispatching SMS alert");

    let receipt = state
        .sms
        .send(&[params.phone], &params.message)
        .await
        .map_err(|e| ApiError::Sms(e.to_string()))?;

    Ok(Json(SendAlertResponse {
        status: "sent",
        sent_at: chrono::Utc::now().to_rfc3339(),
        response: receipt,
    }))
}

// ============================================================================
// Risk Prediction
// ============================================================================

#[derive(Deserialize)]
pub struct PredictRiskParams {
    pub rainfall_mm: f64,
}

#[derive(Serialize)]
pub struct RiskResponse {
    pub risk: &'static str,
    pub action: &'static str,
}

/// Classify flood risk for a rainfall measurement
pub async fn predict_risk(Query(params): Query<PredictRiskParams>) -> Json<RiskResponse> {
    let assessment = risk::assess(params.rainfall_mm);

    Json(RiskResponse {
        risk: assessment.tier.label(),
        action: assessment.tier.action(),
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    Store(String),
    Sms(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Store(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Sms(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}
