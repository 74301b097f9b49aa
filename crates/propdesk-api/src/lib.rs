//! HTTP service for the position-size calculator.
//!
//! Routes:
//! - `POST /calculate-position-size`: evaluate the calculator on a JSON body
//! - `GET /health`: liveness probe

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use propdesk_config::{AppConfig, CalculatorSettings, ServerSettings};
use propdesk_risk::RiskCalculator;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

pub mod error;
pub mod types;

pub use error::{ApiError, Result};
pub use types::{CalculationRequest, CalculationResponse, NumberField};

/// Shared state handed to every handler. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service_name: String,
    pub defaults: CalculatorSettings,
    pub calculator: RiskCalculator,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            service_name: config.app.name.clone(),
            defaults: config.calculator.clone(),
            calculator: RiskCalculator::new(),
        }
    }
}

/// Build the router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard is served from a different origin.
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_check_handler))
        .route("/calculate-position-size", post(calculate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "service": state.service_name }))
}

/// Handler for `POST /calculate-position-size`.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let input = request.into_input(&state.defaults)?;
    let result = state.calculator.compute(&input);

    debug!(
        account_size = %input.account_size,
        risk_percent = %input.risk_percent,
        position_size = %result.position_size,
        risk_reward_ratio = %result.risk_reward_ratio,
        "Calculated position size"
    );

    Ok(Json(CalculationResponse::new(&input, &result)))
}

/// Bind the listener and serve until Ctrl-C.
pub async fn run(settings: &ServerSettings, state: AppState) -> Result<()> {
    let app = create_router(state);

    let address = settings.address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ApiError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Calculator service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("Calculator service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(&AppConfig::default()))
    }

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate-position-size")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "propdesk");
    }

    #[tokio::test]
    async fn test_calculate_full_trade_plan() {
        let (status, body) = post_json(
            r#"{"accountSize": 10000, "riskPercent": 2, "entryPrice": 1.1,
                "stopLoss": 1.095, "takeProfit": 1.11}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["riskAmount"].as_f64(), Some(200.0));
        assert_eq!(body["positionSize"].as_f64(), Some(40000.0));
        assert_eq!(body["riskRewardRatio"].as_f64(), Some(2.0));
        assert_eq!(body["potentialProfit"].as_f64(), Some(400.0));
        assert_eq!(body["potentialLoss"].as_f64(), Some(200.0));
        assert_eq!(body["rating"], "excellent");
        assert_eq!(body["direction"], "long");
    }

    #[tokio::test]
    async fn test_calculate_blank_fields_are_absent() {
        let (status, body) = post_json(
            r#"{"accountSize": "10000", "riskPercent": "1", "entryPrice": "",
                "stopLoss": "", "takeProfit": ""}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["riskAmount"].as_f64(), Some(100.0));
        assert_eq!(body["positionSize"].as_f64(), Some(0.0));
        assert_eq!(body["potentialLoss"].as_f64(), Some(100.0));
        assert!(body["rating"].is_null());
        assert!(body["direction"].is_null());
    }

    #[tokio::test]
    async fn test_calculate_uses_defaults() {
        let (status, body) = post_json(r#"{"entryPrice": 100, "stopLoss": 95}"#).await;

        assert_eq!(status, StatusCode::OK);
        // 1% of 10000 over a 5 point stop
        assert_eq!(body["riskAmount"].as_f64(), Some(100.0));
        assert_eq!(body["positionSize"].as_f64(), Some(20.0));
    }

    #[tokio::test]
    async fn test_calculate_saturates_out_of_range_number() {
        let (status, body) = post_json(r#"{"accountSize": 1e30, "riskPercent": 1}"#).await;

        assert_eq!(status, StatusCode::OK);
        let risk_amount = body["riskAmount"].as_f64().unwrap();
        assert!(risk_amount.is_finite() && risk_amount > 1e26);
        assert_eq!(body["potentialLoss"], body["riskAmount"]);
    }

    #[tokio::test]
    async fn test_calculate_saturates_out_of_range_text() {
        let (status, body) = post_json(r#"{"accountSize": "1e30", "riskPercent": "1"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let risk_amount = body["riskAmount"].as_f64().unwrap();
        assert!(risk_amount.is_finite() && risk_amount > 1e26);
        assert_eq!(body["potentialLoss"], body["riskAmount"]);
    }

    #[tokio::test]
    async fn test_calculate_rejects_bad_number() {
        let (status, body) = post_json(r#"{"accountSize": 10000, "stopLoss": "abc"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("stopLoss"));
    }

    #[tokio::test]
    async fn test_calculate_rejects_malformed_json() {
        let (status, body) = post_json(r#"{"accountSize": "#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
